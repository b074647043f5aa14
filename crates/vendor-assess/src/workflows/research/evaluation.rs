use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::workflows::assessment::AttributeValue;

const RED_FLAG_RULES: [(&str, &str); 3] = [
    ("data_breach_recent", "Recent data breach"),
    ("no_encryption", "No encryption mentioned"),
    ("poor_reviews", "Consistently poor user reviews"),
];

const YELLOW_FLAG_RULES: [(&str, &str); 3] = [
    ("no_certifications", "No security certifications"),
    ("limited_documentation", "Limited security documentation"),
    ("startup_risk", "Young company/startup risk"),
];

const POSITIVE_RULES: [(&str, &str); 3] = [
    ("iso27001_valid", "Valid ISO 27001"),
    ("gdpr_compliant", "GDPR compliant"),
    ("good_reviews", "Strong user reviews"),
];

const NO_GO_RED_FLAGS: usize = 2;
const GO_POSITIVE_INDICATORS: usize = 3;

/// Boolean research observations keyed by name; absent keys read as false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResearchFindings(BTreeMap<String, bool>);

impl ResearchFindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }
}

impl FromIterator<(String, bool)> for ResearchFindings {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for ResearchFindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-boolean notes read by truthiness; nulls are dropped.
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| {
                AttributeValue::from_json(value).map(|value| (key, value.is_truthy()))
            })
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "CONDITIONAL")]
    Conditional,
    #[serde(rename = "NO-GO")]
    NoGo,
    #[serde(rename = "REVIEW REQUIRED")]
    ReviewRequired,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Go => "GO",
            Self::Conditional => "CONDITIONAL",
            Self::NoGo => "NO-GO",
            Self::ReviewRequired => "REVIEW REQUIRED",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse qualitative read on research findings, independent of the weighted scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingsEvaluation {
    pub red_flags: Vec<String>,
    pub yellow_flags: Vec<String>,
    pub positive_indicators: Vec<String>,
    pub missing_information: Vec<String>,
    pub recommendation: Recommendation,
}

pub fn evaluate_findings(findings: &ResearchFindings) -> FindingsEvaluation {
    let red_flags = matching(findings, &RED_FLAG_RULES);
    let yellow_flags = matching(findings, &YELLOW_FLAG_RULES);
    let positive_indicators = matching(findings, &POSITIVE_RULES);

    let recommendation = if red_flags.len() > NO_GO_RED_FLAGS {
        Recommendation::NoGo
    } else if !red_flags.is_empty() {
        Recommendation::Conditional
    } else if positive_indicators.len() >= GO_POSITIVE_INDICATORS {
        Recommendation::Go
    } else {
        Recommendation::ReviewRequired
    };

    FindingsEvaluation {
        red_flags,
        yellow_flags,
        positive_indicators,
        // No rule populates this yet; kept so report consumers see a stable shape.
        missing_information: Vec::new(),
        recommendation,
    }
}

fn matching(findings: &ResearchFindings, rules: &[(&str, &str)]) -> Vec<String> {
    rules
        .iter()
        .filter(|(key, _)| findings.is_set(key))
        .map(|(_, label)| (*label).to_string())
        .collect()
}
