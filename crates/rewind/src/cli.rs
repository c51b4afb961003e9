//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can travel through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $REWIND_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a fixed sequence of cell clicks and print the result
    Replay {
        /// Cells to play in order (0-8, row-major)
        cells: Vec<usize>,

        /// Jump to this move after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the final view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board grid, status and move list
    Text,
    /// The view as pretty-printed JSON
    Json,
}
