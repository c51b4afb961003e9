//! Intents from the presentation layer, and why the engine may refuse them.
//!
//! A presenter never mutates game state directly. It turns user input into
//! an [`Intent`] and hands it to the engine, which either produces the next
//! state or reports a [`MoveError`] and leaves the current one alone.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A user intent delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// A board cell (0-8, row-major) was clicked.
    CellClicked(usize),
    /// An entry in the move list was clicked.
    HistoryEntryClicked(usize),
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::CellClicked(cell) => write!(f, "play cell {}", cell),
            Intent::HistoryEntryClicked(step) => write!(f, "jump to step {}", step),
        }
    }
}

/// Reason an intent was rejected.
///
/// Rejections are ordinary outcomes, not faults: the state they were applied
/// to is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    CellOutOfBounds(usize),

    /// The current board already has a winner.
    #[display("Game is already over: {} has won", _0)]
    GameOver(Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The requested history step does not exist.
    #[display("Step {} is out of range (history has {} entries)", requested, len)]
    StepOutOfRange {
        /// Step that was asked for.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
