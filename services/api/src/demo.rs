use crate::commands::summary_line;
use crate::infra::{parse_category, parse_language};
use chrono::Utc;
use clap::Args;
use vendor_assess::config::AppConfig;
use vendor_assess::error::AppError;
use vendor_assess::workflows::assessment::{keys, render_assessment_report, RiskAssessor, VendorData};
use vendor_assess::workflows::research::{
    evaluate_findings, render_research_report, research_checklist, search_queries,
    ResearchFindings,
};
use vendor_assess::workflows::{Category, FollowUpEmail, Language};

const DEMO_VENDOR: &str = "Example Vendor";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Category for the demo vendor (defaults to 3)
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<Category>,
    /// Output language (en or nl); defaults to APP_LANGUAGE
    #[arg(long, value_parser = parse_language)]
    pub(crate) language: Option<Language>,
    /// Skip the follow-up e-mail portion of the demo
    #[arg(long)]
    pub(crate) skip_email: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let reporting = AppConfig::load()?.reporting;
    let category = match args.category {
        Some(category) => category,
        None => Category::new(3)?,
    };
    let language = args.language.unwrap_or(reporting.language);

    println!("Vendor assessment demo");
    let data = demo_vendor_data();
    let assessment = RiskAssessor::default().assess(DEMO_VENDOR, category, &data);
    println!("{}\n", summary_line(&assessment));
    println!("{}", render_assessment_report(&assessment, &data, language));

    println!("\nResearch plan");
    for query in search_queries(DEMO_VENDOR, category) {
        println!("  {query}");
    }
    let mut checklist = research_checklist(DEMO_VENDOR, category, Utc::now());
    checklist.record("basic", "company_exists", true)?;
    checklist.record("basic", "privacy_policy", true)?;
    let evaluation = evaluate_findings(&demo_findings());
    let sources = vec![
        "vendor_website/trust".to_string(),
        "g2.com".to_string(),
        "haveibeenpwned.com".to_string(),
    ];
    println!(
        "\n{}",
        render_research_report(DEMO_VENDOR, &checklist, &evaluation, &sources)
    );

    if args.skip_email {
        return Ok(());
    }

    println!("\nFollow-up e-mail");
    let email =
        FollowUpEmail::from_assessment(&assessment, reporting.sender_name, reporting.sender_email)
            .with_language(language);
    if email.action_items.is_empty() {
        println!("  No concerns raised; no follow-up needed");
    } else {
        println!("{}", email.render_html()?);
    }

    Ok(())
}

/// Strong security and privacy posture, business-hours support, not yet established.
fn demo_vendor_data() -> VendorData {
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

fn demo_findings() -> ResearchFindings {
    ResearchFindings::new()
        .with("iso27001_valid", true)
        .with("gdpr_compliant", true)
        .with("startup_risk", true)
}
