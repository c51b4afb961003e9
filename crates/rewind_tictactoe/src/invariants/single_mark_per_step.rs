//! Monotonic history invariant: each step adds exactly one mark.

use super::super::{GameHistory, Position, Square};
use super::Invariant;

/// Invariant: every snapshot is its predecessor plus one new mark.
///
/// Squares only transition Empty → Occupied, never reverse or change owner.
pub struct SingleMarkPerStepInvariant;

impl Invariant<GameHistory> for SingleMarkPerStepInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let mut added = 0;
            for pos in Position::ALL {
                match (before.get(pos), after.get(pos)) {
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    (b, a) if b == a => {}
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark and keeps earlier marks"
    }
}
