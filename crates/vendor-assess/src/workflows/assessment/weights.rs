use serde::{Deserialize, Serialize};

/// Points awarded by the security rules. `incidents` is charged per reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityWeights {
    pub certifications: i32,
    pub mfa_sso: i32,
    pub encryption: i32,
    pub testing: i32,
    pub bcp: i32,
    pub incidents: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyWeights {
    pub gdpr_compliance: i32,
    pub eea_location: i32,
    pub dpa_available: i32,
    pub transparency: i32,
    pub rights_management: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalWeights {
    pub uptime_sla: i32,
    pub support_quality: i32,
    pub user_reviews: i32,
    pub financial_health: i32,
    pub market_position: i32,
}

/// Rubric weights per domain. The category thresholds are tuned against
/// [`WeightTable::standard`], so custom tables shift every decision band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    pub security: SecurityWeights,
    pub privacy: PrivacyWeights,
    pub operational: OperationalWeights,
}

impl WeightTable {
    pub const fn standard() -> Self {
        Self {
            security: SecurityWeights {
                certifications: 30,
                mfa_sso: 15,
                encryption: 15,
                testing: 15,
                bcp: 15,
                incidents: -20,
            },
            privacy: PrivacyWeights {
                gdpr_compliance: 25,
                eea_location: 20,
                dpa_available: 15,
                transparency: 20,
                rights_management: 20,
            },
            operational: OperationalWeights {
                uptime_sla: 20,
                support_quality: 15,
                user_reviews: 25,
                financial_health: 20,
                market_position: 20,
            },
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}
