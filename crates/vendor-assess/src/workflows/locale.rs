use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language for rendered reports and correspondence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "nl")]
    Dutch,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Dutch => "nl",
        }
    }

    pub(crate) const fn report_labels(self) -> &'static ReportLabels {
        match self {
            Self::English => &ENGLISH_LABELS,
            Self::Dutch => &DUTCH_LABELS,
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "nl" | "dutch" | "nederlands" => Ok(Self::Dutch),
            other => Err(LanguageError(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}' (expected 'en' or 'nl')")]
pub struct LanguageError(pub String);

/// Headings used by the assessment report renderer.
pub(crate) struct ReportLabels {
    pub(crate) title: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) category: &'static str,
    pub(crate) decision: &'static str,
    pub(crate) risk_level: &'static str,
    pub(crate) overall_score: &'static str,
    pub(crate) required: &'static str,
    pub(crate) gap: &'static str,
    pub(crate) detailed_scores: &'static str,
    pub(crate) domain: &'static str,
    pub(crate) score: &'static str,
    pub(crate) status: &'static str,
    pub(crate) overall: &'static str,
    pub(crate) security: &'static str,
    pub(crate) privacy: &'static str,
    pub(crate) operational: &'static str,
    pub(crate) key_findings: &'static str,
    pub(crate) strengths: &'static str,
    pub(crate) points_of_attention: &'static str,
    pub(crate) none_identified: &'static str,
    pub(crate) compliance: &'static str,
    pub(crate) requirement: &'static str,
    pub(crate) notes: &'static str,
    pub(crate) data_location: &'static str,
    pub(crate) to_be_verified: &'static str,
    pub(crate) yes: &'static str,
    pub(crate) no: &'static str,
    pub(crate) inside_eea: &'static str,
    pub(crate) outside_eea: &'static str,
    pub(crate) recommendations: &'static str,
}

const ENGLISH_LABELS: ReportLabels = ReportLabels {
    title: "Vendor Risk Assessment",
    summary: "Summary",
    category: "Category",
    decision: "Decision",
    risk_level: "Risk Level",
    overall_score: "Overall Score",
    required: "Required",
    gap: "Gap",
    detailed_scores: "Detailed Scores",
    domain: "Domain",
    score: "Score",
    status: "Status",
    overall: "Overall",
    security: "Security",
    privacy: "Privacy",
    operational: "Operational",
    key_findings: "Key Findings",
    strengths: "Strengths",
    points_of_attention: "Points of Attention",
    none_identified: "None identified",
    compliance: "Compliance Status",
    requirement: "Requirement",
    notes: "Notes",
    data_location: "Data Location",
    to_be_verified: "To be verified",
    yes: "Yes",
    no: "No",
    inside_eea: "EEA",
    outside_eea: "Outside EEA",
    recommendations: "Recommendations",
};

const DUTCH_LABELS: ReportLabels = ReportLabels {
    title: "Vendor Risico Assessment",
    summary: "Samenvatting",
    category: "Categorie",
    decision: "Beslissing",
    risk_level: "Risiconiveau",
    overall_score: "Totaalscore",
    required: "Vereist",
    gap: "Verschil",
    detailed_scores: "Gedetailleerde Scores",
    domain: "Domein",
    score: "Score",
    status: "Status",
    overall: "Overall",
    security: "Security",
    privacy: "Privacy",
    operational: "Operations",
    key_findings: "Belangrijkste Bevindingen",
    strengths: "Sterke Punten",
    points_of_attention: "Aandachtspunten",
    none_identified: "Geen",
    compliance: "Compliance Status",
    requirement: "Vereiste",
    notes: "Opmerkingen",
    data_location: "Datalocatie",
    to_be_verified: "Te verifiëren",
    yes: "Ja",
    no: "Nee",
    inside_eea: "EER",
    outside_eea: "Buiten EER",
    recommendations: "Aanbevelingen",
};
