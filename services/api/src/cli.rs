use crate::commands::{
    run_assess, run_batch, run_email, run_research, AssessArgs, BatchArgs, EmailArgs,
    ResearchArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vendor_assess::config::AppConfig;
use vendor_assess::error::AppError;
use vendor_assess::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Vendor Assess",
    about = "Score vendors, plan due-diligence research, and draft follow-up e-mails",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a vendor attribute file and print the risk report
    Assess(AssessArgs),
    /// Assess every vendor in a CSV sheet
    Batch(BatchArgs),
    /// Print research sources, search queries, and the verification checklist
    Research(ResearchArgs),
    /// Draft an HTML follow-up e-mail with action items
    Email(EmailArgs),
    /// Run the bundled example vendor through every pipeline
    Demo(DemoArgs),
}

impl Command {
    /// Everything but `serve` prints its result and exits.
    const fn is_one_shot(&self) -> bool {
        !matches!(self, Self::Serve(_))
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    // The server installs its own subscriber after applying CLI overrides.
    if command.is_one_shot() {
        telemetry::init_stderr(&AppConfig::load()?.telemetry)?;
    }

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Batch(args) => run_batch(args),
        Command::Research(args) => run_research(args),
        Command::Email(args) => run_email(args),
        Command::Demo(args) => run_demo(args),
    }
}
