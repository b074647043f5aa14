use std::fmt::Write;

use super::checklist::ResearchChecklist;
use super::evaluation::FindingsEvaluation;

/// Formats checklist, evaluation, and consulted sources into a research report.
pub fn render_research_report(
    vendor: &str,
    checklist: &ResearchChecklist,
    evaluation: &FindingsEvaluation,
    sources: &[String],
) -> String {
    let mut out = String::new();

    writeln!(out, "# Vendor Research Report: {vendor}\n").expect("write research report");
    writeln!(out, "## Research Metadata").expect("write research report");
    writeln!(out, "- Date: {}", checklist.generated_at.to_rfc3339())
        .expect("write research report");
    writeln!(out, "- Category: {}", checklist.category).expect("write research report");
    writeln!(out, "- Sources Checked: {}\n", sources.len()).expect("write research report");

    writeln!(out, "## Checklist Results").expect("write research report");
    for section in &checklist.sections {
        writeln!(out, "\n### {}", title_case(section.key)).expect("write research report");
        for item in &section.items {
            let status = match item.result {
                Some(true) => "✓",
                Some(false) => "✗",
                None => "?",
            };
            writeln!(out, "- [{status}] {}", title_case(item.key)).expect("write research report");
        }
    }

    writeln!(out, "\n## Evaluation\n").expect("write research report");
    write_bucket(&mut out, "Red Flags", &evaluation.red_flags);
    write_bucket(&mut out, "Yellow Flags", &evaluation.yellow_flags);
    write_bucket(
        &mut out,
        "Positive Indicators",
        &evaluation.positive_indicators,
    );

    writeln!(out, "### Missing Information").expect("write research report");
    if evaluation.missing_information.is_empty() {
        writeln!(out, "- All critical information found").expect("write research report");
    } else {
        write_list(&mut out, &evaluation.missing_information);
    }

    writeln!(out, "\n## Recommendation: {}\n", evaluation.recommendation)
        .expect("write research report");

    writeln!(out, "## Sources Consulted").expect("write research report");
    write_list(&mut out, sources);

    writeln!(out, "\n---").expect("write research report");
    writeln!(
        out,
        "*This report should be reviewed by appropriate stakeholders before final decision.*"
    )
    .expect("write research report");

    out
}

fn write_bucket(out: &mut String, heading: &str, entries: &[String]) {
    writeln!(out, "### {heading} ({})", entries.len()).expect("write research report");
    if entries.is_empty() {
        writeln!(out, "- None identified").expect("write research report");
    } else {
        write_list(out, entries);
    }
    out.push('\n');
}

fn write_list(out: &mut String, entries: &[String]) {
    for entry in entries {
        writeln!(out, "- {entry}").expect("write research report");
    }
}

/// `pen_test_frequency` -> `Pen Test Frequency`.
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
