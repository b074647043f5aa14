use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::workflows::category::Category;

const BASIC_ITEMS: [&str; 4] = [
    "company_exists",
    "website_professional",
    "contact_information",
    "privacy_policy",
];

const SECURITY_ITEMS: [&str; 4] = [
    "security_page",
    "encryption_mentioned",
    "backup_policy",
    "uptime_sla",
];

const COMPLIANCE_ITEMS: [&str; 7] = [
    "iso27001_cert",
    "soc2_report",
    "gdpr_compliance",
    "dpa_available",
    "mfa_supported",
    "sso_supported",
    "data_location",
];

const ADVANCED_ITEMS: [&str; 7] = [
    "bcp_documented",
    "dpia_completed",
    "pen_test_frequency",
    "siem_soc",
    "financial_health",
    "insurance_coverage",
    "exit_strategy",
];

/// Verification point; `result` stays `None` until someone checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub key: &'static str,
    pub result: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistSection {
    pub key: &'static str,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistSection {
    fn unchecked(key: &'static str, items: &[&'static str]) -> Self {
        Self {
            key,
            items: items
                .iter()
                .map(|&item| ChecklistItem {
                    key: item,
                    result: None,
                })
                .collect(),
        }
    }
}

/// Category-scaled research checklist for one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchChecklist {
    pub vendor: String,
    pub category: Category,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<ChecklistSection>,
}

impl ResearchChecklist {
    pub fn section(&self, key: &str) -> Option<&ChecklistSection> {
        self.sections.iter().find(|section| section.key == key)
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    pub fn record(&mut self, section: &str, item: &str, passed: bool) -> Result<(), ChecklistError> {
        let entry = self
            .sections
            .iter_mut()
            .find(|candidate| candidate.key == section)
            .ok_or_else(|| ChecklistError::UnknownSection(section.to_string()))?;

        let slot = entry
            .items
            .iter_mut()
            .find(|candidate| candidate.key == item)
            .ok_or_else(|| ChecklistError::UnknownItem {
                section: section.to_string(),
                item: item.to_string(),
            })?;

        slot.result = Some(passed);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    #[error("checklist has no section '{0}' for this category")]
    UnknownSection(String),
    #[error("checklist section '{section}' has no item '{item}'")]
    UnknownItem { section: String, item: String },
}

pub fn research_checklist(
    vendor: &str,
    category: Category,
    generated_at: DateTime<Utc>,
) -> ResearchChecklist {
    let tier = category.value();
    let mut sections = vec![ChecklistSection::unchecked("basic", &BASIC_ITEMS)];

    if tier >= 3 {
        sections.push(ChecklistSection::unchecked("security", &SECURITY_ITEMS));
    }
    if tier >= 4 {
        sections.push(ChecklistSection::unchecked("compliance", &COMPLIANCE_ITEMS));
    }
    if tier == 5 {
        sections.push(ChecklistSection::unchecked("advanced", &ADVANCED_ITEMS));
    }

    ResearchChecklist {
        vendor: vendor.to_string(),
        category,
        generated_at,
        sections,
    }
}
