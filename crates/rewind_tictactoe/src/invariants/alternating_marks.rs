//! Alternating turn invariant: marks are placed X, O, X, O, ...

use super::super::{GameHistory, Player, Position, Square};
use super::Invariant;

/// Invariant: the mark added at step `k` belongs to the player for step `k - 1`.
///
/// Steps that add no mark are left to [`super::SingleMarkPerStepInvariant`].
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Player::for_step(step);
                Position::ALL.iter().all(|&pos| {
                    match (pair[0].get(pos), pair[1].get(pos)) {
                        (Square::Empty, Square::Occupied(player)) => player == expected,
                        _ => true,
                    }
                })
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
