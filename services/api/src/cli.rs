use crate::reports::{run_dashboard_report, run_rank_report, DashboardArgs, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use leasing_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Leasing Ranking Engine",
    about = "Rank rental applications and summarize leasing pipelines",
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
    /// Print the prioritized review queue for a dataset file
    Rank(RankArgs),
    /// Print dashboard analytics for a dataset file
    Dashboard(DashboardArgs),
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
        Command::Rank(args) => run_rank_report(args),
        Command::Dashboard(args) => run_dashboard_report(args),
    }
}
