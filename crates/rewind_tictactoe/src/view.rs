//! Read-only views handed to the presentation layer.

use super::{Board, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Status line for the board at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player has completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner yet; names whose turn it is.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One entry of the move list.
///
/// Entries are identified by `step`, the stable move number, never by their
/// position in whatever collection a presenter keeps them in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// Move number; also the argument to pass back when the entry is clicked.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// True for the snapshot at the cursor.
    pub is_current: bool,
}

impl MoveEntry {
    /// Builds the entry for `step` with its standard label.
    pub fn for_step(step: usize, is_current: bool) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self::new(step, label, is_current)
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Everything a presenter reads after an intent, in one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GameView {
    /// Board at the cursor.
    pub board: Board,
    /// Status line.
    pub status: GameStatus,
    /// True when X is to move.
    pub is_x_next: bool,
    /// Cursor position.
    pub current_move: usize,
    /// Move list, oldest first.
    pub moves: Vec<MoveEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_move_labels() {
        assert_eq!(MoveEntry::for_step(0, true).label, "Go to game start");
        assert_eq!(MoveEntry::for_step(3, false).label, "Go to move #3");
    }
}
