use std::fmt::Write;

use super::domain::{keys, AttributeValue, Domain, DomainScore, Finding, VendorData};
use super::VendorAssessment;
use crate::workflows::locale::{Language, ReportLabels};

/// How a compliance row turns a vendor attribute into a status word.
#[derive(Clone, Copy)]
enum ComplianceKind {
    Attestation,
    Location,
}

struct ComplianceRow {
    requirement: Option<&'static str>,
    key: &'static str,
    notes_key: &'static str,
    kind: ComplianceKind,
}

/// `None` requirement names use the localized data-location label.
const COMPLIANCE_ROWS: [ComplianceRow; 5] = [
    ComplianceRow {
        requirement: Some("ISO 27001"),
        key: keys::ISO27001,
        notes_key: keys::ISO27001_NOTES,
        kind: ComplianceKind::Attestation,
    },
    ComplianceRow {
        requirement: Some("SOC2 Type II"),
        key: keys::SOC2,
        notes_key: keys::SOC2_NOTES,
        kind: ComplianceKind::Attestation,
    },
    ComplianceRow {
        requirement: Some("GDPR/AVG"),
        key: keys::GDPR_COMPLIANT,
        notes_key: keys::GDPR_NOTES,
        kind: ComplianceKind::Attestation,
    },
    ComplianceRow {
        requirement: None,
        key: keys::DATA_IN_EEA,
        notes_key: keys::LOCATION_NOTES,
        kind: ComplianceKind::Location,
    },
    ComplianceRow {
        requirement: Some("MFA/SSO"),
        key: keys::MFA_AVAILABLE,
        notes_key: keys::MFA_NOTES,
        kind: ComplianceKind::Attestation,
    },
];

/// Renders a Markdown-style assessment report for stakeholders.
///
/// `data` is the record the assessment was computed from; it feeds the
/// compliance table, where absent attributes read "to be verified".
pub fn render_assessment_report(
    assessment: &VendorAssessment,
    data: &VendorData,
    language: Language,
) -> String {
    let labels = language.report_labels();
    let decision = &assessment.decision;
    let mut out = String::new();

    writeln!(out, "# {}: {}\n", labels.title, assessment.vendor).expect("write title");

    writeln!(out, "## {}", labels.summary).expect("write summary heading");
    writeln!(
        out,
        "- **{}**: {} - {}",
        labels.category,
        assessment.category,
        assessment.category.description(language)
    )
    .expect("write category");
    writeln!(out, "- **{}**: {}", labels.decision, decision.decision).expect("write decision");
    writeln!(out, "- **{}**: {}", labels.risk_level, decision.risk_level)
        .expect("write risk level");
    writeln!(
        out,
        "- **{}**: {:.1}/100 ({}: {})",
        labels.overall_score, decision.average_score, labels.required, decision.required_score
    )
    .expect("write overall score");
    writeln!(out, "- **{}**: {:+.1}\n", labels.gap, decision.gap).expect("write gap");

    writeln!(out, "## {}\n", labels.detailed_scores).expect("write scores heading");
    writeln!(
        out,
        "| {} | {} | {} |",
        labels.domain, labels.score, labels.status
    )
    .expect("write scores header");
    writeln!(out, "|---|---|---|").expect("write scores divider");
    for entry in assessment.scores.iter() {
        writeln!(
            out,
            "| {} | {}/100 | {} |",
            domain_label(labels, entry.domain),
            entry.score,
            entry.status().marker()
        )
        .expect("write score row");
    }
    writeln!(
        out,
        "| {} | {:.1}/100 | {} |\n",
        labels.overall,
        decision.average_score,
        decision_marker(assessment)
    )
    .expect("write overall row");

    for entry in assessment.scores.iter() {
        write_domain_section(&mut out, labels, entry);
    }

    write_key_findings(&mut out, labels, assessment);
    write_compliance_section(&mut out, labels, data);

    writeln!(out, "## {}", labels.recommendations).expect("write recommendations heading");
    for line in assessment.recommendations(language) {
        writeln!(out, "- {line}").expect("write recommendation");
    }

    out
}

fn write_domain_section(out: &mut String, labels: &ReportLabels, entry: &DomainScore) {
    writeln!(
        out,
        "### {}: {}/100",
        domain_label(labels, entry.domain),
        entry.score
    )
    .expect("write domain heading");
    for finding in &entry.findings {
        writeln!(out, "{finding}").expect("write finding");
    }
    out.push('\n');
}

fn write_key_findings(out: &mut String, labels: &ReportLabels, assessment: &VendorAssessment) {
    let (concerns, strengths): (Vec<&Finding>, Vec<&Finding>) = assessment
        .scores
        .iter()
        .flat_map(|entry| entry.findings.iter())
        .partition(|finding| finding.is_concern());

    writeln!(out, "## {}\n", labels.key_findings).expect("write key findings heading");
    write_finding_group(out, labels, labels.strengths, &strengths);
    write_finding_group(out, labels, labels.points_of_attention, &concerns);
}

fn write_finding_group(
    out: &mut String,
    labels: &ReportLabels,
    heading: &str,
    findings: &[&Finding],
) {
    writeln!(out, "### {heading}").expect("write findings group heading");
    if findings.is_empty() {
        writeln!(out, "- {}", labels.none_identified).expect("write empty group");
    }
    for finding in findings {
        writeln!(out, "{finding}").expect("write grouped finding");
    }
    out.push('\n');
}

fn write_compliance_section(out: &mut String, labels: &ReportLabels, data: &VendorData) {
    writeln!(out, "## {}\n", labels.compliance).expect("write compliance heading");
    writeln!(
        out,
        "| {} | {} | {} |",
        labels.requirement, labels.status, labels.notes
    )
    .expect("write compliance header");
    writeln!(out, "|---|---|---|").expect("write compliance divider");

    for row in &COMPLIANCE_ROWS {
        let requirement = row.requirement.unwrap_or(labels.data_location);
        let status = compliance_status(labels, row.kind, data.get(row.key));
        let notes = match data.get(row.notes_key) {
            Some(AttributeValue::Text(text)) if !text.trim().is_empty() => table_cell(text),
            _ => "-".to_string(),
        };
        writeln!(out, "| {requirement} | {status} | {notes} |").expect("write compliance row");
    }
    out.push('\n');
}

fn compliance_status(
    labels: &ReportLabels,
    kind: ComplianceKind,
    value: Option<&AttributeValue>,
) -> String {
    match (value, kind) {
        (None, _) => labels.to_be_verified.to_string(),
        (Some(AttributeValue::Text(text)), _) if !text.trim().is_empty() => table_cell(text),
        (Some(value), ComplianceKind::Attestation) => {
            let word = if value.is_truthy() { labels.yes } else { labels.no };
            word.to_string()
        }
        (Some(value), ComplianceKind::Location) => {
            let word = if value.is_truthy() {
                labels.inside_eea
            } else {
                labels.outside_eea
            };
            word.to_string()
        }
    }
}

/// Keeps free text from breaking the Markdown table.
fn table_cell(text: &str) -> String {
    text.trim().replace('|', "/").replace('\n', " ")
}

fn domain_label(labels: &ReportLabels, domain: Domain) -> &'static str {
    match domain {
        Domain::Security => labels.security,
        Domain::Privacy => labels.privacy,
        Domain::Operational => labels.operational,
    }
}

fn decision_marker(assessment: &VendorAssessment) -> &'static str {
    use super::policy::Decision;

    match assessment.decision.decision {
        Decision::Go => "✓",
        Decision::Conditional => "⚠",
        Decision::NoGo => "✗",
    }
}
