use std::io::Cursor;
use vendor_assess::workflows::assessment::{
    decide, keys, render_assessment_report, Decision, DomainScores, RiskAssessor, RiskLevel,
    VendorData,
};
use vendor_assess::workflows::{Category, FollowUpEmail, Language, VendorCsvImporter};

fn category(value: u8) -> Category {
    Category::new(value).expect("valid category")
}

#[test]
fn vendor_json_flows_through_assessment_report_and_follow_up() {
    let data: VendorData = serde_json::from_str(
        r#"{
            "iso27001": true,
            "mfa_available": true,
            "encryption_at_rest": true,
            "encryption_in_transit": false,
            "security_incidents": 1,
            "gdpr_compliant": true,
            "data_in_eea": false,
            "dpa_available": true,
            "uptime_sla": 99.0,
            "support_business_hours": true,
            "user_rating": 3.5,
            "established_vendor": null,
            "certifications": ["ISO 27001"],
            "contact": { "name": "Jordan" }
        }"#,
    )
    .expect("vendor data parses");

    let assessment = RiskAssessor::default().assess("Acme Cloud", category(4), &data);

    // 30 + 15 - 20
    assert_eq!(assessment.scores.security.score, 25);
    assert_eq!(assessment.scores.privacy.score, 40);
    // 10 + 7 + 12
    assert_eq!(assessment.scores.operational.score, 29);
    assert_eq!(assessment.decision.decision, Decision::NoGo);
    assert_eq!(assessment.decision.risk_level, RiskLevel::High);
    assert_eq!(assessment.decision.average_score, 31.3);
    assert_eq!(assessment.decision.gap, -38.7);

    let report = render_assessment_report(&assessment, &data, Language::English);
    assert!(report.contains("⚠ Moderate uptime SLA (99%)"));
    assert!(report.contains("✗ 1 security incidents"));
    assert!(report.contains("- Consider alternative vendors"));
    assert!(report.contains("| SOC2 Type II | To be verified | - |"));
    assert!(report.contains("| Data Location | Outside EEA | - |"));

    let html = FollowUpEmail::from_assessment(&assessment, "Vendor Desk", "desk@example.com")
        .render_html()
        .expect("concerns become action items");
    assert!(html.contains("1. Partial encryption"));
    assert!(html.contains("Data outside EEA"));
}

#[test]
fn csv_sheet_assesses_every_vendor_in_order() {
    let csv = "vendor,category,iso27001,mfa_available,gdpr_compliant,data_in_eea,uptime_sla\n\
Northwind,2,yes,yes,yes,yes,99.95\n\
Contoso,5,no,no,no,no,\n";
    let assessor = RiskAssessor::default();
    let outcomes: Vec<(String, Decision)> = VendorCsvImporter::from_reader(Cursor::new(csv))
        .expect("sheet imports")
        .into_iter()
        .map(|record| {
            let assessment = assessor.assess(&record.vendor, record.category, &record.data);
            (assessment.vendor, assessment.decision.decision)
        })
        .collect();

    assert_eq!(
        outcomes,
        vec![
            ("Northwind".to_string(), Decision::NoGo),
            ("Contoso".to_string(), Decision::NoGo),
        ]
    );
}

#[test]
fn category_thresholds_drive_decisions() {
    let scores = DomainScores::from_values(65, 65, 65);
    let decisions: Vec<Decision> = (1..=5u8)
        .map(|tier| decide(tier, &scores).decision)
        .collect();

    assert_eq!(
        decisions,
        vec![
            Decision::Go,
            Decision::Go,
            Decision::Go,
            Decision::Conditional,
            Decision::NoGo,
        ]
    );

    let out_of_range = decide(9, &scores);
    assert_eq!(out_of_range.required_score, 60);
    assert_eq!(out_of_range.decision, Decision::Go);
}

#[test]
fn absent_keys_match_explicit_false() {
    let assessor = RiskAssessor::default();
    let implicit = assessor.score(&VendorData::new().with(keys::GDPR_COMPLIANT, true));
    let explicit = assessor.score(
        &VendorData::new()
            .with(keys::GDPR_COMPLIANT, true)
            .with(keys::ISO27001, false)
            .with(keys::FINANCIALLY_STABLE, false),
    );
    assert_eq!(implicit, explicit);
}
