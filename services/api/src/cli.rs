use crate::report::{
    run_dataset_report, run_scenario_report, DatasetReportArgs, ScenarioReportArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use news_intel::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Executive News Intelligence Engine",
    about = "Rule-based news intelligence for executives: serve the report API or render reports locally",
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
    /// Generate an executive intelligence report in the terminal
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Analyze one of the curated news scenarios
    Scenario(ScenarioReportArgs),
    /// Analyze a labeled news dataset, optionally filtered by category
    Dataset(DatasetReportArgs),
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

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report {
            command: ReportCommand::Scenario(args),
        } => run_scenario_report(args),
        Command::Report {
            command: ReportCommand::Dataset(args),
        } => run_dataset_report(args),
    }
}
