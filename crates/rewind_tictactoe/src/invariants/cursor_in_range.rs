//! Cursor invariant: the current step always names a stored snapshot.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: history starts from an empty board and the cursor points into it.
pub struct CursorInRangeInvariant;

impl Invariant<GameHistory> for CursorInRangeInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.history().first() == Some(&Board::new()) && game.current_move() < game.len()
    }

    fn description() -> &'static str {
        "History starts with an empty board and the current step is within it"
    }
}
