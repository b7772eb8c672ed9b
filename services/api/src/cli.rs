use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand, ValueEnum};
use unichance::chances::{Algorithm, ProBudgetMode, SortOrder};
use unichance::config::AppConfig;
use unichance::error::AppError;
use unichance::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "unichance",
    about = "Score admission chances for university programs over HTTP or from the command line",
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
    /// Score a questionnaire profile (JSON file) against the catalog
    Score(ScoreArgs),
    /// Score a built-in sample applicant with both algorithms
    Demo(DemoArgs),
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

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum AlgorithmArg {
    #[default]
    Simple,
    Pro,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Simple => Algorithm::Simple,
            AlgorithmArg::Pro => Algorithm::Pro,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SortArg {
    #[default]
    Chance,
    Budget,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Chance => SortOrder::Chance,
            SortArg::Budget => SortOrder::Budget,
        }
    }
}

/// `--coupled-budget` forces the coupled pro variant; otherwise the configured mode applies.
pub(crate) fn budget_mode(coupled_flag: bool, configured: ProBudgetMode) -> ProBudgetMode {
    if coupled_flag {
        ProBudgetMode::Coupled
    } else {
        configured
    }
}

/// Configuration plus the stderr subscriber shared by every subcommand.
fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = bootstrap()?;

    match command {
        Command::Serve(args) => server::run(args, config).await,
        Command::Score(args) => run_score(args, &config.scoring),
        Command::Demo(args) => run_demo(args, &config.scoring),
    }
}
