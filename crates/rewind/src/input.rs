//! Line-oriented input parsing.
//!
//! One line is one command. Cells may be given by index or by label
//! (`center`, `top-left`, ...).

use rewind_tictactoe::{Intent, Position};
use tracing::instrument;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the engine.
    Intent(Intent),
    /// Start a new game.
    Restart,
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// The line was blank.
    #[display("Empty input")]
    Empty,
    /// The first word is not a known command.
    #[display("Unknown command: {}", _0)]
    UnknownCommand(String),
    /// A command was given without its argument.
    #[display("`{}` needs an argument", _0)]
    MissingArgument(&'static str),
    /// The argument could not be read.
    #[display("Invalid argument for `{}`: {}", command, argument)]
    InvalidArgument {
        /// Command being parsed.
        command: &'static str,
        /// Offending text.
        argument: String,
    },
}

impl std::error::Error for ParseError {}

/// Summary printed for `help`.
pub const HELP: &str = "\
Commands:
  <cell> | play <cell>   place a mark (0-8 or a label such as `center`)
  jump <move>            go to a move from the list
  new                    start a new game
  help                   show this text
  quit                   leave";

/// Parses one input line.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };
    let rest = words.collect::<Vec<_>>().join(" ");

    match head.to_lowercase().as_str() {
        "play" | "p" => parse_cell("play", &rest),
        "jump" | "j" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("jump"));
            }
            rest.parse::<usize>()
                .map(|step| Command::Intent(Intent::HistoryEntryClicked(step)))
                .map_err(|_| ParseError::InvalidArgument {
                    command: "jump",
                    argument: rest.clone(),
                })
        }
        "new" | "restart" => Ok(Command::Restart),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => parse_cell("play", line.trim())
            .map_err(|_| ParseError::UnknownCommand(head.to_string())),
    }
}

fn parse_cell(command: &'static str, arg: &str) -> Result<Command, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    // Raw indices go straight through so the engine can reject out-of-range cells.
    let cell = match arg.parse::<usize>() {
        Ok(cell) => cell,
        Err(_) => Position::from_label_or_number(arg)
            .map(Position::to_index)
            .ok_or_else(|| ParseError::InvalidArgument {
                command,
                argument: arg.to_string(),
            })?,
    };
    Ok(Command::Intent(Intent::CellClicked(cell)))
}
