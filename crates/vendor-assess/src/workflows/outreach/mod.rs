//! HTML follow-up e-mails asking a vendor to resolve assessment concerns.

mod templates;

use crate::workflows::assessment::VendorAssessment;
use crate::workflows::category::Category;
use crate::workflows::locale::Language;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use templates::{escape_html, template, STYLE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutreachError {
    #[error("follow-up e-mail for '{vendor}' has no action items")]
    NoActionItems { vendor: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpEmail {
    pub vendor: String,
    pub category: Category,
    pub action_items: Vec<String>,
    #[serde(default)]
    pub contact: Option<String>,
    pub sender_name: String,
    pub sender_email: String,
    #[serde(default)]
    pub language: Language,
}

impl FollowUpEmail {
    pub fn new(
        vendor: impl Into<String>,
        category: Category,
        action_items: Vec<String>,
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            category,
            action_items,
            contact: None,
            sender_name: sender_name.into(),
            sender_email: sender_email.into(),
            language: Language::default(),
        }
    }

    /// Seeds the action items with every concern raised by the assessment.
    pub fn from_assessment(
        assessment: &VendorAssessment,
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
    ) -> Self {
        let action_items = assessment
            .concerns()
            .into_iter()
            .map(|finding| finding.message.clone())
            .collect();

        Self::new(
            assessment.vendor.clone(),
            assessment.category,
            action_items,
            sender_name,
            sender_email,
        )
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Blank action items are skipped; nothing left to ask is an error.
    pub fn render_html(&self) -> Result<String, OutreachError> {
        let items: Vec<&str> = self
            .action_items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect();
        if items.is_empty() {
            return Err(OutreachError::NoActionItems {
                vendor: self.vendor.clone(),
            });
        }

        let copy = template(self.language);
        let contact = self
            .contact
            .as_deref()
            .map(str::trim)
            .filter(|contact| !contact.is_empty())
            .unwrap_or(copy.default_contact);

        let mut html = String::new();
        writeln!(html, "<!DOCTYPE html>").expect("write email html");
        writeln!(html, "<html lang=\"{}\">", self.language.code()).expect("write email html");
        writeln!(html, "<head>").expect("write email html");
        writeln!(html, "    <meta charset=\"UTF-8\">").expect("write email html");
        html.push_str(STYLE);
        writeln!(html, "</head>").expect("write email html");
        writeln!(html, "<body>").expect("write email html");
        writeln!(html, "    <p>{} {},</p>", copy.greeting, escape_html(contact))
            .expect("write email html");
        writeln!(
            html,
            "    <p>{}</p>",
            (copy.intro)(&escape_html(&self.vendor), self.category)
        )
        .expect("write email html");
        writeln!(html, "    <p>{}</p>", copy.followup).expect("write email html");
        writeln!(html, "    <p><strong>{}</strong></p>", copy.action_items_header)
            .expect("write email html");
        for (index, item) in items.iter().enumerate() {
            writeln!(
                html,
                "    <div class=\"action-item\">{}. {}</div>",
                index + 1,
                escape_html(item)
            )
            .expect("write email html");
        }
        writeln!(html, "    <p>{}</p>", copy.requests).expect("write email html");
        writeln!(html, "    <ul>").expect("write email html");
        for request in copy.request_items {
            writeln!(html, "        <li>{request}</li>").expect("write email html");
        }
        writeln!(html, "    </ul>").expect("write email html");
        writeln!(html, "    <p>{}</p>", copy.closing).expect("write email html");
        writeln!(html, "    <p>{}</p>", copy.questions).expect("write email html");
        writeln!(html, "    <div class=\"signature\">").expect("write email html");
        writeln!(html, "        <p>{}</p>", copy.signoff).expect("write email html");
        writeln!(
            html,
            "        <p><strong>{}</strong><br>\n        E: {}</p>",
            escape_html(&self.sender_name),
            escape_html(&self.sender_email)
        )
        .expect("write email html");
        writeln!(html, "    </div>").expect("write email html");
        writeln!(html, "</body>").expect("write email html");
        write!(html, "</html>").expect("write email html");

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::{keys, RiskAssessor, VendorData};

    fn category(value: u8) -> Category {
        Category::new(value).expect("valid category")
    }

    fn email(items: &[&str]) -> FollowUpEmail {
        FollowUpEmail::new(
            "Acme <Cloud>",
            category(4),
            items.iter().map(|item| item.to_string()).collect(),
            "Vendor Management",
            "vendors@example.com",
        )
    }

    #[test]
    fn english_email_numbers_action_items_and_escapes_text() {
        let html = email(&["Provide SOC2 report", "Confirm R&D data location"])
            .render_html()
            .expect("renders");

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<p>Dear Sir/Madam,</p>"));
        assert!(html.contains("vendor assessment for Acme &lt;Cloud&gt;, we have conducted"));
        assert!(html.contains("<strong>Category 4</strong>"));
        assert!(html.contains("<div class=\"action-item\">1. Provide SOC2 report</div>"));
        assert!(html.contains("<div class=\"action-item\">2. Confirm R&amp;D data location</div>"));
        assert!(html.contains("<li>Share a timeline for the implementation of any required changes</li>"));
        assert!(html.contains("<strong>Vendor Management</strong>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn dutch_email_uses_dutch_copy_and_contact() {
        let html = email(&["Lever de DPA aan"])
            .with_contact("Mevrouw Jansen")
            .with_language(Language::Dutch)
            .render_html()
            .expect("renders");

        assert!(html.contains("<html lang=\"nl\">"));
        assert!(html.contains("<p>Beste Mevrouw Jansen,</p>"));
        assert!(html.contains("<strong>Categorie 4</strong>"));
        assert!(html.contains("<p><strong>Actiepunten:</strong></p>"));
        assert!(html.contains("<p>Met vriendelijke groet,</p>"));
    }

    #[test]
    fn blank_action_items_are_rejected() {
        let error = email(&["  ", ""]).render_html().expect_err("nothing to ask");
        assert_eq!(
            error,
            OutreachError::NoActionItems {
                vendor: "Acme <Cloud>".to_string()
            }
        );
    }

    #[test]
    fn action_items_default_to_assessment_concerns() {
        let data = VendorData::new()
            .with(keys::ISO27001, true)
            .with(keys::MFA_AVAILABLE, true)
            .with(keys::GDPR_COMPLIANT, true)
            .with(keys::UPTIME_SLA, 99.5);
        let assessment = RiskAssessor::default().assess("Acme", category(3), &data);

        let email = FollowUpEmail::from_assessment(&assessment, "Vendor Management", "vendors@example.com");
        let expected: Vec<String> = assessment
            .concerns()
            .into_iter()
            .map(|finding| finding.message.clone())
            .collect();

        assert!(!expected.is_empty());
        assert_eq!(email.action_items, expected);
        assert!(email
            .action_items
            .iter()
            .any(|item| item.starts_with("Moderate uptime SLA")));
        assert!(email.render_html().is_ok());
    }
}
