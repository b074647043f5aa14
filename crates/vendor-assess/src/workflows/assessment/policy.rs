use super::domain::DomainScores;
use crate::workflows::locale::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold applied to categories outside the 1-5 table.
pub const DEFAULT_REQUIRED_SCORE: u8 = 60;

/// Width of the conditional band below the required score.
const CONDITIONAL_BAND: f64 = 10.0;

/// Go/no-go outcome of the weighted risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "CONDITIONAL")]
    Conditional,
    #[serde(rename = "NO-GO")]
    NoGo,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Go => "GO",
            Self::Conditional => "CONDITIONAL",
            Self::NoGo => "NO-GO",
        }
    }

    pub const fn recommendations(self, language: Language) -> [&'static str; 3] {
        match (self, language) {
            (Self::NoGo, Language::English) => [
                "Vendor does not meet minimum requirements",
                "Consider alternative vendors",
                "If proceeding, implement significant additional controls",
            ],
            (Self::Conditional, Language::English) => [
                "Address identified gaps before full deployment",
                "Implement compensating controls",
                "Schedule follow-up assessment in 6 months",
            ],
            (Self::Go, Language::English) => [
                "Proceed with standard onboarding",
                "Document any residual risks",
                "Schedule periodic reviews per policy",
            ],
            (Self::NoGo, Language::Dutch) => [
                "Leverancier voldoet niet aan de minimale eisen",
                "Overweeg alternatieve leveranciers",
                "Bij doorgaan aanvullende beheersmaatregelen implementeren",
            ],
            (Self::Conditional, Language::Dutch) => [
                "Geïdentificeerde tekortkomingen oplossen vóór volledige uitrol",
                "Compenserende maatregelen implementeren",
                "Vervolgassessment plannen over 6 maanden",
            ],
            (Self::Go, Language::Dutch) => [
                "Doorgaan met standaard onboarding",
                "Eventuele restrisico's documenteren",
                "Periodieke reviews plannen volgens beleid",
            ],
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Acceptable,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Acceptable => "Acceptable",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decision record; `average_score` and `gap` are rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskDecision {
    pub decision: Decision,
    pub risk_level: RiskLevel,
    pub average_score: f64,
    pub required_score: u8,
    pub gap: f64,
}

impl RiskDecision {
    pub const fn recommendations(&self, language: Language) -> [&'static str; 3] {
        self.decision.recommendations(language)
    }
}

pub const fn required_score(category: u8) -> u8 {
    match category {
        1 | 2 => 50,
        3 => 60,
        4 => 70,
        5 => 80,
        _ => DEFAULT_REQUIRED_SCORE,
    }
}

/// Compares the unrounded average against the category threshold.
pub fn decide(category: u8, scores: &DomainScores) -> RiskDecision {
    let average = scores.average();
    let required = required_score(category);
    let threshold = f64::from(required);

    let (decision, risk_level) = if average >= threshold {
        (Decision::Go, RiskLevel::Acceptable)
    } else if average >= threshold - CONDITIONAL_BAND {
        (Decision::Conditional, RiskLevel::Medium)
    } else {
        (Decision::NoGo, RiskLevel::High)
    };

    RiskDecision {
        decision,
        risk_level,
        average_score: round_tenth(average),
        required_score: required,
        gap: round_tenth(average - threshold),
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
