use super::common::*;
use crate::workflows::assessment::{
    keys, AttributeValue, Domain, Polarity, RiskAssessor, VendorData, WeightTable,
};

#[test]
fn empty_record_scores_zero_with_default_findings() {
    let scores = assessor().score(&VendorData::new());

    assert_eq!(scores.security.score, 0);
    assert_eq!(
        finding_lines(&scores.security),
        vec![
            "✗ No security certification",
            "✗ MFA not available",
            "⚠ Partial encryption",
        ]
    );

    assert_eq!(scores.privacy.score, 0);
    assert_eq!(
        finding_lines(&scores.privacy),
        vec!["✗ GDPR compliance unclear", "⚠ Data outside EEA"]
    );

    assert_eq!(scores.operational.score, 0);
    assert_eq!(
        finding_lines(&scores.operational),
        vec!["⚠ Financial stability uncertain"]
    );
}

#[test]
fn missing_keys_behave_like_explicit_false() {
    let explicit = VendorData::new()
        .with(keys::ISO27001, false)
        .with(keys::MFA_AVAILABLE, false)
        .with(keys::PENTEST_FREQUENCY, "")
        .with(keys::SECURITY_INCIDENTS, 0u32)
        .with(keys::GDPR_COMPLIANT, false)
        .with(keys::DPA_AVAILABLE, false)
        .with(keys::UPTIME_SLA, 0.0)
        .with(keys::ESTABLISHED_VENDOR, false);

    assert_eq!(
        assessor().score(&explicit),
        assessor().score(&VendorData::new())
    );
}

#[test]
fn example_vendor_scores_per_domain() {
    let scores = assessor().score(&example_vendor());

    assert_eq!(scores.security.score, 90);
    assert_eq!(scores.privacy.score, 100);
    assert_eq!(scores.operational.score, 72);
    assert_eq!(
        finding_lines(&scores.operational),
        vec![
            "✓ High uptime SLA (99.9%)",
            "⚠ Business hours support only",
            "✓ Good user rating (4.3/5)",
            "✓ Financially stable",
        ]
    );
}

#[test]
fn holding_both_certifications_counts_once() {
    let data = VendorData::new()
        .with(keys::ISO27001, true)
        .with(keys::SOC2, true);
    let score = assessor().score_security(&data);

    assert_eq!(score.score, 30);
    let certification_findings = score
        .findings
        .iter()
        .filter(|finding| finding.message.contains("certification"))
        .count();
    assert_eq!(certification_findings, 1);
}

#[test]
fn partial_encryption_earns_nothing_and_warns() {
    let data = VendorData::new().with(keys::ENCRYPTION_AT_REST, true);
    let score = assessor().score_security(&data);

    assert_eq!(score.score, 0);
    assert!(score
        .findings
        .iter()
        .any(|finding| finding.polarity == Polarity::Warning
            && finding.message == "Partial encryption"));
}

#[test]
fn any_pentest_frequency_value_counts_as_testing() {
    let annual = VendorData::new().with(keys::PENTEST_FREQUENCY, "annual");
    let blank = VendorData::new().with(keys::PENTEST_FREQUENCY, "");

    assert_eq!(assessor().score_security(&annual).score, 15);
    assert_eq!(assessor().score_security(&blank).score, 0);
}

#[test]
fn each_incident_costs_twenty_points_until_clamped() {
    let mut previous = u8::MAX;
    for incidents in 0..=6u32 {
        let data = example_vendor().with(keys::SECURITY_INCIDENTS, incidents);
        let score = assessor().score_security(&data);

        let expected = (90 - 20 * incidents as i64).max(0) as u8;
        assert_eq!(score.score, expected, "incidents = {incidents}");
        assert!(score.score <= previous);
        previous = score.score;

        let reported = score
            .findings
            .iter()
            .any(|finding| finding.to_string() == format!("✗ {incidents} security incidents"));
        assert_eq!(reported, incidents > 0);
    }
}

#[test]
fn privacy_only_reports_missing_gdpr_and_eea() {
    let data = VendorData::new()
        .with(keys::GDPR_COMPLIANT, true)
        .with(keys::DATA_IN_EEA, true);
    let score = assessor().score_privacy(&data);

    assert_eq!(score.score, 45);
    assert_eq!(
        finding_lines(&score),
        vec!["✓ GDPR compliant", "✓ Data in EEA"]
    );
}

#[test]
fn operational_partial_credit_uses_half_weights() {
    let data = VendorData::new()
        .with(keys::UPTIME_SLA, 99.5)
        .with(keys::SUPPORT_BUSINESS_HOURS, true)
        .with(keys::USER_RATING, 3.5)
        .with(keys::ESTABLISHED_VENDOR, true);
    let score = assessor().score_operational(&data);

    assert_eq!(score.score, 10 + 7 + 12 + 20);
    assert_eq!(
        finding_lines(&score),
        vec![
            "⚠ Moderate uptime SLA (99.5%)",
            "⚠ Business hours support only",
            "⚠ Average user rating (3.5/5)",
            "⚠ Financial stability uncertain",
            "✓ Established market position",
        ]
    );
}

#[test]
fn operational_low_values_emit_no_findings() {
    let data = VendorData::new()
        .with(keys::UPTIME_SLA, 98.7)
        .with(keys::USER_RATING, 2.9)
        .with(keys::FINANCIALLY_STABLE, true);
    let score = assessor().score_operational(&data);

    assert_eq!(score.score, 20);
    assert_eq!(finding_lines(&score), vec!["✓ Financially stable"]);
}

#[test]
fn scores_stay_within_bounds_for_adversarial_weights() {
    let mut inflated = WeightTable::standard();
    inflated.security.certifications = 500;
    inflated.privacy.gdpr_compliance = 400;
    inflated.operational.uptime_sla = -300;
    let engine = RiskAssessor::new(inflated);

    let data = example_vendor().with(keys::SECURITY_INCIDENTS, 1_000_000u32);
    let scores = engine.score(&data);
    assert_eq!(scores.security.score, 0);
    assert_eq!(scores.privacy.score, 100);
    assert_eq!(scores.operational.score, 0);

    let scores = engine.score(&example_vendor());
    assert_eq!(scores.security.score, 100);
    for entry in scores.iter() {
        assert!(entry.score <= 100);
    }
}

#[test]
fn scoring_is_idempotent() {
    let engine = assessor();
    let data = example_vendor().with(keys::SECURITY_INCIDENTS, 2u32);

    let first = engine.score(&data);
    let second = engine.score(&data);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn vendor_data_deserializes_mixed_json_and_ignores_nulls() {
    let data: VendorData = serde_json::from_str(
        r#"{"iso27001": true, "security_incidents": 2, "uptime_sla": 99.95,
            "pentest_frequency": "quarterly", "soc2": null}"#,
    )
    .expect("vendor data parses");

    assert_eq!(data.len(), 4);
    assert!(data.get(keys::SOC2).is_none());
    assert_eq!(data.count(keys::SECURITY_INCIDENTS), 2);
    assert!(data.flag(keys::PENTEST_FREQUENCY));
    assert_eq!(assessor().score_security(&data).score, 30 + 15 - 40);
}

#[test]
fn vendor_data_reads_lists_and_objects_by_emptiness() {
    let data: VendorData = serde_json::from_str(
        r#"{"iso27001": true, "certifications": ["iso27001"],
            "contact": {"name": "x"}, "soc2": [], "mfa_available": {}}"#,
    )
    .expect("nested values do not reject the record");

    let entries: Vec<(&str, &AttributeValue)> = data.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("certifications", &AttributeValue::Boolean(true)),
            ("contact", &AttributeValue::Boolean(true)),
            ("iso27001", &AttributeValue::Boolean(true)),
            ("mfa_available", &AttributeValue::Boolean(false)),
            ("soc2", &AttributeValue::Boolean(false)),
        ]
    );
    assert!(!data.flag(keys::SOC2));
    assert_eq!(data.number("contact"), 0.0);
    assert_eq!(assessor().score_security(&data).score, 30);
}

#[test]
fn assessor_keeps_the_weight_table_it_was_built_with() {
    assert_eq!(assessor().weights(), &WeightTable::standard());

    let mut custom = WeightTable::standard();
    custom.security.mfa_sso = 5;
    let engine = RiskAssessor::new(custom);
    assert_eq!(engine.weights().security.mfa_sso, 5);
    assert_eq!(engine.weights().privacy, WeightTable::standard().privacy);
}

#[test]
fn domain_scores_carry_their_domain() {
    let scores = assessor().score(&example_vendor());
    let domains: Vec<Domain> = scores.iter().map(|entry| entry.domain).collect();
    assert_eq!(domains, Domain::ordered().to_vec());
}
