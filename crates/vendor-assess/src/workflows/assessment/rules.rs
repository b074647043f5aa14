use super::domain::{keys, Domain, DomainScore, Finding, VendorData};
use super::weights::{OperationalWeights, PrivacyWeights, SecurityWeights};

const HIGH_UPTIME_SLA: f64 = 99.9;
const MODERATE_UPTIME_SLA: f64 = 99.0;
const GOOD_USER_RATING: f64 = 4.0;
const AVERAGE_USER_RATING: f64 = 3.0;

pub(crate) fn score_security(data: &VendorData, weights: &SecurityWeights) -> DomainScore {
    let mut score: i64 = 0;
    let mut findings = Vec::new();

    if data.flag(keys::ISO27001) || data.flag(keys::SOC2) {
        score += i64::from(weights.certifications);
        findings.push(Finding::positive("Security certification present"));
    } else {
        findings.push(Finding::negative("No security certification"));
    }

    if data.flag(keys::MFA_AVAILABLE) {
        score += i64::from(weights.mfa_sso);
        findings.push(Finding::positive("MFA available"));
    } else {
        findings.push(Finding::negative("MFA not available"));
    }

    if data.flag(keys::ENCRYPTION_AT_REST) && data.flag(keys::ENCRYPTION_IN_TRANSIT) {
        score += i64::from(weights.encryption);
        findings.push(Finding::positive("Full encryption"));
    } else {
        findings.push(Finding::warning("Partial encryption"));
    }

    if data.flag(keys::PENTEST_FREQUENCY) {
        score += i64::from(weights.testing);
        findings.push(Finding::positive("Regular security testing"));
    }

    if data.flag(keys::BCP_DOCUMENTED) {
        score += i64::from(weights.bcp);
        findings.push(Finding::positive("BCP documented"));
    }

    let incidents = data.count(keys::SECURITY_INCIDENTS);
    if incidents > 0 {
        score += i64::from(weights.incidents) * i64::from(incidents);
        findings.push(Finding::negative(format!("{incidents} security incidents")));
    }

    DomainScore::clamped(Domain::Security, score, findings)
}

pub(crate) fn score_privacy(data: &VendorData, weights: &PrivacyWeights) -> DomainScore {
    let mut score: i64 = 0;
    let mut findings = Vec::new();

    if data.flag(keys::GDPR_COMPLIANT) {
        score += i64::from(weights.gdpr_compliance);
        findings.push(Finding::positive("GDPR compliant"));
    } else {
        findings.push(Finding::negative("GDPR compliance unclear"));
    }

    if data.flag(keys::DATA_IN_EEA) {
        score += i64::from(weights.eea_location);
        findings.push(Finding::positive("Data in EEA"));
    } else {
        findings.push(Finding::warning("Data outside EEA"));
    }

    // The remaining privacy checks stay silent when unmet.
    if data.flag(keys::DPA_AVAILABLE) {
        score += i64::from(weights.dpa_available);
        findings.push(Finding::positive("DPA available"));
    }

    if data.flag(keys::PRIVACY_TRANSPARENCY) {
        score += i64::from(weights.transparency);
        findings.push(Finding::positive("Transparent privacy practices"));
    }

    if data.flag(keys::USER_RIGHTS_SUPPORTED) {
        score += i64::from(weights.rights_management);
        findings.push(Finding::positive("User rights supported"));
    }

    DomainScore::clamped(Domain::Privacy, score, findings)
}

pub(crate) fn score_operational(data: &VendorData, weights: &OperationalWeights) -> DomainScore {
    let mut score: i64 = 0;
    let mut findings = Vec::new();

    let uptime = data.number(keys::UPTIME_SLA);
    if uptime >= HIGH_UPTIME_SLA {
        score += i64::from(weights.uptime_sla);
        findings.push(Finding::positive(format!("High uptime SLA ({uptime}%)")));
    } else if uptime >= MODERATE_UPTIME_SLA {
        score += i64::from(weights.uptime_sla / 2);
        findings.push(Finding::warning(format!("Moderate uptime SLA ({uptime}%)")));
    }

    if data.flag(keys::SUPPORT_24_7) {
        score += i64::from(weights.support_quality);
        findings.push(Finding::positive("24/7 support available"));
    } else if data.flag(keys::SUPPORT_BUSINESS_HOURS) {
        score += i64::from(weights.support_quality / 2);
        findings.push(Finding::warning("Business hours support only"));
    }

    let rating = data.number(keys::USER_RATING);
    if rating >= GOOD_USER_RATING {
        score += i64::from(weights.user_reviews);
        findings.push(Finding::positive(format!("Good user rating ({rating}/5)")));
    } else if rating >= AVERAGE_USER_RATING {
        score += i64::from(weights.user_reviews / 2);
        findings.push(Finding::warning(format!("Average user rating ({rating}/5)")));
    }

    if data.flag(keys::FINANCIALLY_STABLE) {
        score += i64::from(weights.financial_health);
        findings.push(Finding::positive("Financially stable"));
    } else {
        findings.push(Finding::warning("Financial stability uncertain"));
    }

    if data.flag(keys::ESTABLISHED_VENDOR) {
        score += i64::from(weights.market_position);
        findings.push(Finding::positive("Established market position"));
    }

    DomainScore::clamped(Domain::Operational, score, findings)
}
