use crate::workflows::assessment::{keys, DomainScore, RiskAssessor, VendorData};
use crate::workflows::category::Category;

/// Vendor profile used by the bundled demo: strong security and privacy posture,
/// business-hours support only and not yet an established market player.
pub(super) fn example_vendor() -> VendorData {
    VendorData::new()
        .with(keys::ISO27001, true)
        .with(keys::SOC2, false)
        .with(keys::MFA_AVAILABLE, true)
        .with(keys::ENCRYPTION_AT_REST, true)
        .with(keys::ENCRYPTION_IN_TRANSIT, true)
        .with(keys::PENTEST_FREQUENCY, "annual")
        .with(keys::BCP_DOCUMENTED, true)
        .with(keys::SECURITY_INCIDENTS, 0u32)
        .with(keys::GDPR_COMPLIANT, true)
        .with(keys::DATA_IN_EEA, true)
        .with(keys::DPA_AVAILABLE, true)
        .with(keys::PRIVACY_TRANSPARENCY, true)
        .with(keys::USER_RIGHTS_SUPPORTED, true)
        .with(keys::UPTIME_SLA, 99.9)
        .with(keys::SUPPORT_24_7, false)
        .with(keys::SUPPORT_BUSINESS_HOURS, true)
        .with(keys::USER_RATING, 4.3)
        .with(keys::FINANCIALLY_STABLE, true)
        .with(keys::ESTABLISHED_VENDOR, false)
}

pub(super) fn assessor() -> RiskAssessor {
    RiskAssessor::default()
}

pub(super) fn category(value: u8) -> Category {
    Category::new(value).expect("valid category")
}

pub(super) fn finding_lines(score: &DomainScore) -> Vec<String> {
    score
        .findings
        .iter()
        .map(|finding| finding.to_string())
        .collect()
}
