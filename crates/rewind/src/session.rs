//! Interactive play loop.
//!
//! Reads one command per line, hands intents to the engine, and re-renders
//! the view after every accepted one. Rejected intents leave the game as it
//! was and print nothing but a short note.

use crate::config::RewindConfig;
use crate::input::{Command, HELP, parse_command};
use crate::render::render_view;
use anyhow::{Context, Result};
use rewind_tictactoe::GameHistory;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Runs a session until `quit` or end of input and returns the final state.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &RewindConfig,
) -> Result<GameHistory> {
    let display = config.display();
    let mut game = GameHistory::new();
    write!(output, "{}", render_view(&game.view(), display)).context("Failed to write view")?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, line = %line, "Unparseable input");
                writeln!(output, "{} (type `help` for commands)", err)?;
                continue;
            }
        };

        let next = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Command::Restart => game.restart(),
            Command::Intent(intent) => match game.dispatch(intent) {
                Ok(next) => next,
                Err(err) => {
                    debug!(%intent, %err, "Intent rejected");
                    writeln!(output, "Ignored: {}", err)?;
                    continue;
                }
            },
        };

        game = next;
        write!(output, "\n{}", render_view(&game.view(), display))
            .context("Failed to write view")?;
    }

    info!(moves = game.len() - 1, current_move = game.current_move(), "Session ended");
    output.flush()?;
    Ok(game)
}
