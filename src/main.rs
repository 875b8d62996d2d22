use std::process::ExitCode;

use clap::Parser;
use dex_core::TerminalState;
use pokedex_rust::cli::Args;
use pokedex_rust::{app, config, logging, AppError};

const EXIT_ABORTED: u8 = 1;
const EXIT_SETUP: u8 = 2;

async fn run(args: Args) -> Result<TerminalState, AppError> {
    let config = config::config()?;
    logging::init(&config.log_filter)?;

    let fetcher = app::http_fetcher(config)?;
    let mut ctx = args.into_request();
    let run = app::execute(&mut ctx, config, fetcher).await?;
    Ok(run.state)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(TerminalState::Completed) => ExitCode::SUCCESS,
        Ok(TerminalState::Aborted { message, .. }) => {
            eprintln!("Handler error: {message}");
            ExitCode::from(EXIT_ABORTED)
        }
        Err(e) => {
            eprintln!("Error! {e}");
            ExitCode::from(EXIT_SETUP)
        }
    }
}
