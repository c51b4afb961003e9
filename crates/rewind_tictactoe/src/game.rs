//! Time-travel game engine for tic-tac-toe.
//!
//! [`GameHistory`] owns every board snapshot along the live branch of play
//! and a cursor selecting which snapshot is "now". Operations borrow the
//! current state and return the next one, so a rejected intent can never
//! leave a half-applied update behind.

use super::action::{Intent, MoveError};
use super::contracts::{Contract, JumpContract, LegalMove};
#[cfg(debug_assertions)]
use super::contracts::MoveContract;
use super::rules::evaluate;
use super::view::{GameStatus, GameView, MoveEntry};
use super::{Board, Outcome, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Board history with a movable cursor.
///
/// Index 0 is always the empty board; index `k` is the board after `k` moves.
/// X is to move when the cursor is even, O when it is odd.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameHistory {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameHistory {
    /// Creates a new game: one empty board, cursor at the start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Places the current player's mark on `cell` (0-8).
    ///
    /// Snapshots after the cursor are discarded before the new board is
    /// appended, so playing from a rewound position overwrites the old future.
    /// The receiver is never modified.
    ///
    /// # Errors
    ///
    /// - [`MoveError::CellOutOfBounds`] if `cell > 8`
    /// - [`MoveError::GameOver`] if the current board already has a winner
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn apply_move(&self, cell: usize) -> Result<Self, MoveError> {
        let pos = LegalMove::check(cell, self).inspect_err(|err| {
            debug!(%err, "Move rejected");
        })?;

        let player = self.next_player();
        let next_board = self.current_board().with_mark(pos, player);

        let mut history = self.history[..=self.current_move].to_vec();
        history.push(next_board);
        let next = Self {
            current_move: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        info!(
            %player,
            position = %pos,
            current_move = next.current_move,
            discarded = self.history.len() - self.current_move - 1,
            "Move applied"
        );
        Ok(next)
    }

    /// Moves the cursor to `step`, leaving every snapshot in place.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StepOutOfRange`] if `step` is not a stored snapshot.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, MoveError> {
        JumpContract::pre(self, &step).inspect_err(|err| {
            debug!(%err, "Jump rejected");
        })?;

        let next = Self {
            history: self.history.clone(),
            current_move: step,
        };

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        debug!(step, "Jumped");
        Ok(next)
    }

    /// Routes a presentation-layer intent to the matching operation.
    #[instrument(skip(self))]
    pub fn dispatch(&self, intent: Intent) -> Result<Self, MoveError> {
        match intent {
            Intent::CellClicked(cell) => self.apply_move(cell),
            Intent::HistoryEntryClicked(step) => self.jump_to(step),
        }
    }

    /// Starts a new game, dropping all history.
    #[instrument(skip(self))]
    #[must_use]
    pub fn restart(&self) -> Self {
        info!(discarded = self.history.len(), "Restarting game");
        Self::new()
    }

    /// Builds a game by playing `cells` in order from the start.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        cells
            .iter()
            .try_fold(Self::new(), |game, &cell| game.apply_move(cell))
    }

    /// Returns the board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns the cursor position.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns every stored snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of stored snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True when X is to move at the cursor.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player to move at the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_move)
    }

    /// Evaluates the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Status line for the board at the cursor.
    ///
    /// Never reports a draw; a full board with no winner still names the
    /// next player.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            Outcome::Winner(player) => GameStatus::Winner(player),
            Outcome::NoWinner => GameStatus::NextPlayer(self.next_player()),
        }
    }

    /// One entry per stored snapshot, keyed by move number.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry::for_step(step, step == self.current_move))
            .collect()
    }

    /// Bundles every derived view for a presenter.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::new(
            *self.current_board(),
            self.status(),
            self.is_x_next(),
            self.current_move,
            self.move_list(),
        )
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_new_game() {
        let game = GameHistory::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(game.is_x_next());
        assert_eq!(game.current_board(), &Board::new());
    }

    #[test]
    fn test_apply_move_places_current_player() {
        let game = GameHistory::new().apply_move(4).expect("empty square");
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert!(!game.is_x_next());

        let game = game.apply_move(0).expect("empty square");
        assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.len(), 3);
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn test_rejected_move_leaves_receiver_untouched() {
        let game = GameHistory::replay(&[4]).expect("legal");
        let before = game.clone();

        assert_eq!(
            game.apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.apply_move(9), Err(MoveError::CellOutOfBounds(9)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_jump_discards_future() {
        let game = GameHistory::replay(&[0, 1, 2, 3]).expect("legal");
        let branched = game.jump_to(1).and_then(|g| g.apply_move(8)).expect("legal");

        assert_eq!(branched.len(), 3);
        assert_eq!(branched.current_move(), 2);
        assert_eq!(&branched.history()[..2], &game.history()[..2]);
        assert_eq!(
            branched.current_board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
        assert!(branched.current_board().is_empty(Position::TopRight));
    }

    #[test]
    fn test_jump_out_of_range() {
        let game = GameHistory::replay(&[0, 1]).expect("legal");
        assert_eq!(
            game.jump_to(3),
            Err(MoveError::StepOutOfRange {
                requested: 3,
                len: 3
            })
        );
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let game = GameHistory::new()
            .dispatch(Intent::CellClicked(2))
            .and_then(|g| g.dispatch(Intent::HistoryEntryClicked(0)))
            .expect("legal");
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.len(), 2);
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        assert_eq!(
            GameHistory::replay(&[0, 0, 1]),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_restart() {
        let game = GameHistory::replay(&[0, 1, 2]).expect("legal");
        assert_eq!(game.restart(), GameHistory::new());
    }
}
