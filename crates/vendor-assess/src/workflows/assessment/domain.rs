use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Attribute keys understood by the domain scorers.
pub mod keys {
    pub const ISO27001: &str = "iso27001";
    pub const SOC2: &str = "soc2";
    pub const MFA_AVAILABLE: &str = "mfa_available";
    pub const ENCRYPTION_AT_REST: &str = "encryption_at_rest";
    pub const ENCRYPTION_IN_TRANSIT: &str = "encryption_in_transit";
    pub const PENTEST_FREQUENCY: &str = "pentest_frequency";
    pub const BCP_DOCUMENTED: &str = "bcp_documented";
    pub const SECURITY_INCIDENTS: &str = "security_incidents";
    pub const GDPR_COMPLIANT: &str = "gdpr_compliant";
    pub const DATA_IN_EEA: &str = "data_in_eea";
    pub const DPA_AVAILABLE: &str = "dpa_available";
    pub const PRIVACY_TRANSPARENCY: &str = "privacy_transparency";
    pub const USER_RIGHTS_SUPPORTED: &str = "user_rights_supported";
    pub const UPTIME_SLA: &str = "uptime_sla";
    pub const SUPPORT_24_7: &str = "support_24_7";
    pub const SUPPORT_BUSINESS_HOURS: &str = "support_business_hours";
    pub const USER_RATING: &str = "user_rating";
    pub const FINANCIALLY_STABLE: &str = "financially_stable";
    pub const ESTABLISHED_VENDOR: &str = "established_vendor";

    /// Free-text remarks shown beside the compliance rows of the report.
    pub const ISO27001_NOTES: &str = "iso27001_notes";
    pub const SOC2_NOTES: &str = "soc2_notes";
    pub const GDPR_NOTES: &str = "gdpr_notes";
    pub const LOCATION_NOTES: &str = "location_notes";
    pub const MFA_NOTES: &str = "mfa_notes";
}

/// A single self-reported or researched vendor fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl AttributeValue {
    /// Truthiness used by every boolean-gated rule.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(value) => *value,
            Self::Number(value) => *value != 0.0,
            Self::Text(value) => !value.is_empty(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Maps any JSON value onto an attribute. `null` has no attribute; arrays
    /// and objects collapse to whether they hold anything.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(flag) => Some(Self::Boolean(flag)),
            Value::Number(number) => Some(
                number
                    .as_f64()
                    .map(Self::Number)
                    .unwrap_or(Self::Boolean(true)),
            ),
            Value::String(text) => Some(Self::Text(text)),
            Value::Array(items) => Some(Self::Boolean(!items.is_empty())),
            Value::Object(fields) => Some(Self::Boolean(!fields.is_empty())),
        }
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::from_json(Value::deserialize(deserializer)?)
            .ok_or_else(|| D::Error::custom("attribute value must not be null"))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Unordered vendor attribute record. Absent keys read as false or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VendorData(BTreeMap<String, AttributeValue>);

impl VendorData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).map(AttributeValue::is_truthy).unwrap_or(false)
    }

    pub fn number(&self, key: &str) -> f64 {
        self.get(key)
            .and_then(AttributeValue::as_number)
            .unwrap_or(0.0)
    }

    /// Non-negative whole count; fractions truncate and negatives read as zero.
    pub fn count(&self, key: &str) -> u32 {
        let value = self.number(key);
        if value.is_finite() && value > 0.0 {
            value as u32
        } else {
            0
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl FromIterator<(String, AttributeValue)> for VendorData {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for VendorData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // JSON nulls are treated like missing keys.
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| AttributeValue::from_json(value).map(|value| (key, value)))
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Security,
    Privacy,
    Operational,
}

impl Domain {
    pub const fn ordered() -> [Self; 3] {
        [Self::Security, Self::Privacy, Self::Operational]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    Warning,
}

impl Polarity {
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Positive => "✓",
            Self::Negative => "✗",
            Self::Warning => "⚠",
        }
    }
}

/// Human-readable outcome of a single scoring rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub polarity: Polarity,
    pub message: String,
}

impl Finding {
    pub fn positive(message: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::Positive,
            message: message.into(),
        }
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::Negative,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            polarity: Polarity::Warning,
            message: message.into(),
        }
    }

    pub fn is_concern(&self) -> bool {
        self.polarity != Polarity::Positive
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.polarity.marker(), self.message)
    }
}

/// Clamped score and ordered findings for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: Domain,
    pub score: u8,
    pub findings: Vec<Finding>,
}

impl DomainScore {
    pub(crate) fn clamped(domain: Domain, raw: i64, findings: Vec<Finding>) -> Self {
        Self {
            domain,
            score: raw.clamp(0, 100) as u8,
            findings,
        }
    }

    /// Traffic-light status used in the report table: 70+ passes, 50+ warns.
    pub fn status(&self) -> Polarity {
        if self.score >= 70 {
            Polarity::Positive
        } else if self.score >= 50 {
            Polarity::Warning
        } else {
            Polarity::Negative
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScores {
    pub security: DomainScore,
    pub privacy: DomainScore,
    pub operational: DomainScore,
}

impl DomainScores {
    /// Builds scores without findings, e.g. when replaying externally computed results.
    pub fn from_values(security: u8, privacy: u8, operational: u8) -> Self {
        Self {
            security: DomainScore::clamped(Domain::Security, security.into(), Vec::new()),
            privacy: DomainScore::clamped(Domain::Privacy, privacy.into(), Vec::new()),
            operational: DomainScore::clamped(Domain::Operational, operational.into(), Vec::new()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainScore> {
        [&self.security, &self.privacy, &self.operational].into_iter()
    }

    /// Unweighted mean of the three domain scores.
    pub fn average(&self) -> f64 {
        let total: u32 = self.iter().map(|entry| u32::from(entry.score)).sum();
        f64::from(total) / 3.0
    }
}
