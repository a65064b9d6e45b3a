use crate::quiz::{run_quiz, QuizRunArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cx_maturity::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CX Maturity Quiz",
    about = "Serve the CX maturity quiz relay or run the quiz from the command line",
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
    /// Work with the questionnaire directly
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Answer all sections, print the maturity result, and submit it
    Run(QuizRunArgs),
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
        Command::Quiz {
            command: QuizCommand::Run(args),
        } => run_quiz(args).await,
    }
}
