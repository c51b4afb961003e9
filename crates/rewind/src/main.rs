//! Rewind - CLI entry point.

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, Command, RewindConfig, init_tracing, render_replay, run_session};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = RewindConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            info!("Starting interactive session");
            let stdin = std::io::stdin();
            run_session(stdin.lock(), std::io::stdout().lock(), &config)?;
        }
        Command::Replay { cells, jump, format } => {
            print!("{}", render_replay(&cells, jump, format, &config)?);
        }
    }

    Ok(())
}
