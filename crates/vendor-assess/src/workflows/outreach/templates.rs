use crate::workflows::category::Category;
use crate::workflows::locale::Language;

/// Fixed copy for one follow-up e-mail language.
pub(crate) struct EmailTemplate {
    pub(crate) default_contact: &'static str,
    pub(crate) greeting: &'static str,
    /// Receives the already escaped vendor name.
    pub(crate) intro: fn(&str, Category) -> String,
    pub(crate) followup: &'static str,
    pub(crate) action_items_header: &'static str,
    pub(crate) requests: &'static str,
    pub(crate) request_items: [&'static str; 3],
    pub(crate) closing: &'static str,
    pub(crate) questions: &'static str,
    pub(crate) signoff: &'static str,
}

static ENGLISH: EmailTemplate = EmailTemplate {
    default_contact: "Sir/Madam",
    greeting: "Dear",
    intro: english_intro,
    followup: "Following this assessment, there are several points we would like to address with you before we can proceed to approval:",
    action_items_header: "Action Items:",
    requests: "These points are detailed in the attached report. We kindly request you to:",
    request_items: [
        "Provide the requested information/documentation",
        "Implement the necessary improvements where applicable",
        "Share a timeline for the implementation of any required changes",
    ],
    closing: "Once we have received the requested information and the points have been addressed, we can finalize the assessment and proceed to final approval.",
    questions: "Please feel free to contact us if you have any questions or would like to discuss further.",
    signoff: "Kind regards,",
};

static DUTCH: EmailTemplate = EmailTemplate {
    default_contact: "contactpersoon",
    greeting: "Beste",
    intro: dutch_intro,
    followup: "Naar aanleiding van deze beoordeling zijn er een aantal punten die wij graag met jullie willen afstemmen voordat we kunnen overgaan tot goedkeuring:",
    action_items_header: "Actiepunten:",
    requests: "Deze punten zijn nader uitgewerkt in de bijgevoegde rapportage. Wij verzoeken jullie vriendelijk om:",
    request_items: [
        "De gevraagde informatie/documentatie aan te leveren",
        "Indien van toepassing, de benodigde verbeteringen door te voeren",
        "Een planning te delen voor de implementatie van eventuele wijzigingen",
    ],
    closing: "Zodra we de gevraagde informatie hebben ontvangen en de punten zijn afgestemd, kunnen we de assessment afronden en overgaan tot definitieve goedkeuring.",
    questions: "Voor vragen of overleg kunt u uiteraard contact met ons opnemen.",
    signoff: "Met vriendelijke groet,",
};

fn english_intro(vendor: &str, category: Category) -> String {
    format!(
        "As part of our vendor assessment for {vendor}, we have conducted an evaluation in \
         accordance with ISO 27001 and NEN 7510 guidelines. This vendor has been classified as \
         <strong>Category {category}</strong> due to the nature of data processing and \
         business-critical impact."
    )
}

fn dutch_intro(vendor: &str, category: Category) -> String {
    format!(
        "In het kader van onze vendor assessment voor {vendor} hebben wij een beoordeling \
         uitgevoerd conform de ISO 27001 en NEN 7510 richtlijnen. Deze leverancier is \
         gecategoriseerd als <strong>Categorie {category}</strong> vanwege de aard van de \
         gegevensverwerking en de bedrijfskritische impact."
    )
}

pub(crate) fn template(language: Language) -> &'static EmailTemplate {
    match language {
        Language::English => &ENGLISH,
        Language::Dutch => &DUTCH,
    }
}

pub(crate) const STYLE: &str = r#"    <style>
        body {
            font-family: 'Calibri', 'Arial', sans-serif;
            font-size: 11pt;
            color: #000000;
            line-height: 1.5;
        }
        .signature {
            margin-top: 20px;
            font-family: 'Calibri', 'Arial', sans-serif;
        }
        .action-item {
            margin-left: 20px;
            margin-bottom: 8px;
        }
    </style>
"#;

pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"R&D" isn't safe</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; isn&#39;t safe&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
