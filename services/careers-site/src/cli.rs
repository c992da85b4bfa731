use crate::commands::{run_apply, run_general, run_positions, ApplyArgs, GeneralArgs, PositionsArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use careers_intake::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "WMSols Careers",
    about = "Serve the careers site content and submit job applications from the command line",
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
    /// Print the category filter bar and the matching open positions
    Positions(PositionsArgs),
    /// Apply for a listed position with a resume
    Apply(ApplyArgs),
    /// Send a general application to the talent pool
    General(GeneralArgs),
    /// Walk through browsing, applying, and the general form without sending anything
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Positions(args) => run_positions(args),
        Command::Apply(args) => run_apply(args).await,
        Command::General(args) => run_general(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
