//! Non-interactive replay of a move sequence.

use crate::cli::OutputFormat;
use crate::config::RewindConfig;
use crate::render::render_view;
use anyhow::{Context, Result};
use rewind_tictactoe::GameHistory;
use tracing::{info, instrument};

/// Plays `cells` from a new game, optionally jumps, and renders the final view.
///
/// Fails on the first rejected move or an out-of-range jump.
#[instrument(skip(config))]
pub fn render_replay(
    cells: &[usize],
    jump: Option<usize>,
    format: OutputFormat,
    config: &RewindConfig,
) -> Result<String> {
    let mut game = GameHistory::replay(cells).context("Replay rejected a move")?;
    if let Some(step) = jump {
        game = game
            .jump_to(step)
            .with_context(|| format!("Cannot jump to move {}", step))?;
    }
    info!(len = game.len(), current_move = game.current_move(), "Replay finished");

    let view = game.view();
    match format {
        OutputFormat::Text => Ok(render_view(&view, config.display())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&view).context("Failed to serialize view")
        }
    }
}
