use crate::infra::{parse_category, parse_language, read_json_file};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use vendor_assess::config::AppConfig;
use vendor_assess::error::AppError;
use vendor_assess::workflows::assessment::{
    render_assessment_report, RiskAssessor, VendorAssessment, VendorData,
};
use vendor_assess::workflows::research::{
    evaluate_findings, render_research_report, research_checklist, research_sources,
    search_queries, ResearchFindings,
};
use vendor_assess::workflows::{Category, FollowUpEmail, Language, VendorCsvImporter};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Vendor name shown in the report
    #[arg(long)]
    pub(crate) vendor: String,
    /// Vendor category (1-5)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Category,
    /// JSON file with vendor attributes
    #[arg(long)]
    pub(crate) data: PathBuf,
    /// Report language (en or nl); defaults to APP_LANGUAGE
    #[arg(long, value_parser = parse_language)]
    pub(crate) language: Option<Language>,
    /// Print the assessment as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV sheet with `vendor`, `category`, and attribute columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print all assessments as a JSON array
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ResearchArgs {
    #[arg(long)]
    pub(crate) vendor: String,
    /// Vendor category (1-5)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Category,
    /// JSON object of boolean research findings
    #[arg(long)]
    pub(crate) findings: Option<PathBuf>,
    /// Source consulted during research (repeatable)
    #[arg(long = "source")]
    pub(crate) sources: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct EmailArgs {
    #[arg(long)]
    pub(crate) vendor: String,
    /// Vendor category (1-5)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Category,
    /// Action item to request from the vendor (repeatable)
    #[arg(long = "action-item", required_unless_present = "data")]
    pub(crate) action_items: Vec<String>,
    /// Vendor attribute file; its assessment concerns become the action items
    #[arg(long, conflicts_with = "action_items")]
    pub(crate) data: Option<PathBuf>,
    /// Name used in the greeting
    #[arg(long)]
    pub(crate) contact: Option<String>,
    #[arg(long)]
    pub(crate) sender_name: Option<String>,
    #[arg(long)]
    pub(crate) sender_email: Option<String>,
    /// E-mail language (en or nl); defaults to APP_LANGUAGE
    #[arg(long, value_parser = parse_language)]
    pub(crate) language: Option<Language>,
    /// Write the HTML to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let reporting = AppConfig::load()?.reporting;
    let data: VendorData = read_json_file(&args.data)?;
    let assessment = RiskAssessor::default().assess(&args.vendor, args.category, &data);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        let language = args.language.unwrap_or(reporting.language);
        println!("{}", render_assessment_report(&assessment, &data, language));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let assessor = RiskAssessor::default();
    let assessments: Vec<VendorAssessment> = VendorCsvImporter::from_path(&args.csv)?
        .into_iter()
        .map(|record| assessor.assess(&record.vendor, record.category, &record.data))
        .collect();
    info!(vendors = assessments.len(), path = %args.csv.display(), "batch assessed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessments)?);
        return Ok(());
    }

    for assessment in &assessments {
        println!("{}", summary_line(assessment));
    }

    Ok(())
}

pub(crate) fn summary_line(assessment: &VendorAssessment) -> String {
    let decision = &assessment.decision;
    format!(
        "{} (category {}): {} | score {:.1}/100, required {}, gap {:+.1} | risk {}",
        assessment.vendor,
        assessment.category,
        decision.decision,
        decision.average_score,
        decision.required_score,
        decision.gap,
        decision.risk_level
    )
}

pub(crate) fn run_research(args: ResearchArgs) -> Result<(), AppError> {
    let ResearchArgs {
        vendor,
        category,
        findings,
        sources,
    } = args;

    let findings: ResearchFindings = match findings {
        Some(path) => read_json_file(&path)?,
        None => ResearchFindings::default(),
    };

    println!("Research sources for {vendor}");
    for group in research_sources() {
        println!("  {}: {}", group.kind.label(), group.sources.join(", "));
    }

    println!("\nSearch queries");
    for query in search_queries(&vendor, category) {
        println!("  {query}");
    }

    let checklist = research_checklist(&vendor, category, Utc::now());
    let evaluation = evaluate_findings(&findings);
    println!(
        "\n{}",
        render_research_report(&vendor, &checklist, &evaluation, &sources)
    );

    Ok(())
}

pub(crate) fn run_email(args: EmailArgs) -> Result<(), AppError> {
    let reporting = AppConfig::load()?.reporting;
    let sender_name = args.sender_name.unwrap_or(reporting.sender_name);
    let sender_email = args.sender_email.unwrap_or(reporting.sender_email);
    let language = args.language.unwrap_or(reporting.language);

    let mut email = match args.data {
        Some(path) => {
            let data: VendorData = read_json_file(&path)?;
            let assessment = RiskAssessor::default().assess(&args.vendor, args.category, &data);
            FollowUpEmail::from_assessment(&assessment, sender_name, sender_email)
        }
        None => FollowUpEmail::new(
            args.vendor,
            args.category,
            args.action_items,
            sender_name,
            sender_email,
        ),
    }
    .with_language(language);
    if let Some(contact) = args.contact {
        email = email.with_contact(contact);
    }

    let html = email.render_html()?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!("Follow-up e-mail written to {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}
