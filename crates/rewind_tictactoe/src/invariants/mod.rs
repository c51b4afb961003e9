//! First-class invariants for the move history.
//!
//! Invariants are logical properties that must hold after every accepted
//! intent. They are testable independently and checked in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose at the type level.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn record<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        record::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_marks;
pub mod cursor_in_range;
pub mod single_mark_per_step;

pub use alternating_marks::AlternatingMarksInvariant;
pub use cursor_in_range::CursorInRangeInvariant;
pub use single_mark_per_step::SingleMarkPerStepInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    CursorInRangeInvariant,
    SingleMarkPerStepInvariant,
    AlternatingMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameHistory, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let game = GameHistory::replay(&[0, 4, 2]).expect("legal moves");
        assert!(HistoryInvariants::check_all(&game).is_ok());

        let game = game.jump_to(1).expect("step exists");
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Two marks appear in one step, and O moves first.
        let corrupted = GameHistory {
            history: vec![
                Board::new(),
                Board::new()
                    .with_mark(Position::TopLeft, Player::O)
                    .with_mark(Position::Center, Player::O),
            ],
            current_move: 5,
        };

        let violations = HistoryInvariants::check_all(&corrupted).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CursorInRangeInvariant, AlternatingMarksInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }
}
