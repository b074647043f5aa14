//! Weighted vendor risk scoring and the category-driven go/no-go decision.

pub mod domain;
mod policy;
mod report;
mod rules;
mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    keys, AttributeValue, Domain, DomainScore, DomainScores, Finding, Polarity, VendorData,
};
pub use policy::{decide, required_score, Decision, RiskDecision, RiskLevel, DEFAULT_REQUIRED_SCORE};
pub use report::render_assessment_report;
pub use weights::{OperationalWeights, PrivacyWeights, SecurityWeights, WeightTable};

use super::category::Category;
use super::locale::Language;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer that applies a weight table to vendor attribute records.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    weights: WeightTable,
}

impl RiskAssessor {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn score_security(&self, data: &VendorData) -> DomainScore {
        rules::score_security(data, &self.weights.security)
    }

    pub fn score_privacy(&self, data: &VendorData) -> DomainScore {
        rules::score_privacy(data, &self.weights.privacy)
    }

    pub fn score_operational(&self, data: &VendorData) -> DomainScore {
        rules::score_operational(data, &self.weights.operational)
    }

    pub fn score(&self, data: &VendorData) -> DomainScores {
        DomainScores {
            security: self.score_security(data),
            privacy: self.score_privacy(data),
            operational: self.score_operational(data),
        }
    }

    pub fn assess(&self, vendor: &str, category: Category, data: &VendorData) -> VendorAssessment {
        let scores = self.score(data);
        let decision = decide(category.value(), &scores);

        debug!(
            vendor,
            category = category.value(),
            security = scores.security.score,
            privacy = scores.privacy.score,
            operational = scores.operational.score,
            decision = decision.decision.label(),
            "vendor assessed"
        );

        VendorAssessment {
            vendor: vendor.to_string(),
            category,
            scores,
            decision,
        }
    }
}

/// Complete output of one risk assessment pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorAssessment {
    pub vendor: String,
    pub category: Category,
    pub scores: DomainScores,
    pub decision: RiskDecision,
}

impl VendorAssessment {
    pub fn recommendations(&self, language: Language) -> [&'static str; 3] {
        self.decision.recommendations(language)
    }

    /// Negative and warning findings across all domains, in domain order.
    pub fn concerns(&self) -> Vec<&Finding> {
        self.scores
            .iter()
            .flat_map(|entry| entry.findings.iter())
            .filter(|finding| finding.is_concern())
            .collect()
    }
}
