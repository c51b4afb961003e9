//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win the game when held by one player.
pub type WinLine = [Position; 3];

/// Every winning line, in evaluation order: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of evaluating a board.
///
/// `NoWinner` covers both a game still in progress and a full board;
/// use [`super::is_draw`] to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player holds a complete line.
    Winner(Player),
    /// No line is complete.
    NoWinner,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::NoWinner => None,
        }
    }

    /// Returns true once a player has won.
    pub fn is_decided(&self) -> bool {
        matches!(self, Outcome::Winner(_))
    }
}

/// Returns the first winning line on the board, in [`WIN_LINES`] order.
///
/// Total over every board, reachable or not: if several lines are complete
/// the earliest one wins.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Evaluates the board.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    winning_line(board)
        .and_then(|[a, _, _]| board.get(a).player())
        .map_or(Outcome::NoWinner, Outcome::Winner)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}
