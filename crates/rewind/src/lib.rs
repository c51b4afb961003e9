//! Terminal front end for rewind tic-tac-toe.
//!
//! The engine lives in `rewind_tictactoe`; this crate only turns lines of
//! text into intents and views back into text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod replay;
pub mod session;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{CONFIG_ENV_VAR, ConfigError, DisplayConfig, EmptyCell, RewindConfig};
pub use input::{ParseError, parse_command};
pub use logging::{DEFAULT_LOG_FILTER, init_tracing};
pub use render::{render_board, render_view};
pub use replay::render_replay;
pub use session::run_session;
