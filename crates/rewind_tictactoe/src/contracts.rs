//! Contract-based validation for the move history.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::MoveError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::evaluate;
use super::{GameHistory, Outcome, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the cell index addresses a square on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Resolves the index to a position or rejects it.
    #[instrument]
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::CellOutOfBounds(cell))
    }
}

/// Precondition: nobody has won on the current board.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects with the winner if the current board is decided.
    #[instrument(skip(game))]
    pub fn check(game: &GameHistory) -> Result<(), MoveError> {
        match evaluate(game.current_board()) {
            Outcome::Winner(player) => Err(MoveError::GameOver(player)),
            Outcome::NoWinner => Ok(()),
        }
    }
}

/// Precondition: the target square on the current board is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects if `pos` is taken on the current board.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameHistory) -> Result<(), MoveError> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition for placing a mark.
///
/// Checked in order: bounds, then winner, then occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target position.
    #[instrument(skip(game))]
    pub fn check(cell: usize, game: &GameHistory) -> Result<Position, MoveError> {
        let pos = CellOnBoard::check(cell)?;
        NoWinnerYet::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(pos)
    }
}

/// Contract for cell-click moves.
///
/// Postconditions: the history invariants hold, and the new history is the
/// old one up to the old cursor plus exactly one snapshot.
pub struct MoveContract;

impl Contract<GameHistory, usize> for MoveContract {
    fn pre(game: &GameHistory, cell: &usize) -> Result<(), MoveError> {
        LegalMove::check(*cell, game).map(|_| ())
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        check_invariants(after)?;

        let kept = before.current_move() + 1;
        let extends_prefix = after.len() == kept + 1
            && after.current_move() == kept
            && after.history()[..kept] == before.history()[..kept];
        if !extends_prefix {
            warn!(
                before_len = before.len(),
                after_len = after.len(),
                "Move did not extend history from the current step"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history not truncated and extended by one".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contract for history jumps.
///
/// Postcondition: snapshots are untouched, only the cursor moved.
pub struct JumpContract;

impl Contract<GameHistory, usize> for JumpContract {
    fn pre(game: &GameHistory, step: &usize) -> Result<(), MoveError> {
        if *step < game.len() {
            Ok(())
        } else {
            Err(MoveError::StepOutOfRange {
                requested: *step,
                len: game.len(),
            })
        }
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        check_invariants(after)?;
        if before.history() != after.history() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: jump changed history".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_invariants(game: &GameHistory) -> Result<(), MoveError> {
    HistoryInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}
