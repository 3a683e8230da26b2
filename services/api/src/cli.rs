use crate::commands::{run_lead_score, run_market_build, LeadScoreArgs, MarketBuildArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use realty_pulse::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Realty Pulse",
    about = "Build market snapshots and score leads for the South Jersey realty site",
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
    /// Market tracker extract processing
    Market {
        #[command(subcommand)]
        command: MarketCommand,
    },
    /// Lead questionnaire tools
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MarketCommand {
    /// Transform county and zip extracts into counties.json and zipcodes.json
    Build(MarketBuildArgs),
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// Score a questionnaire answer set read from a file or stdin
    Score(LeadScoreArgs),
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
        Command::Market {
            command: MarketCommand::Build(args),
        } => run_market_build(args),
        Command::Leads {
            command: LeadsCommand::Score(args),
        } => run_lead_score(args),
    }
}
