//! Tic-tac-toe with a rewindable move history.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`evaluate`], [`WIN_LINES`])
//! - **Engine**: [`GameHistory`], the snapshot list plus a cursor
//! - **Contracts**: preconditions and debug-build postconditions for every transition
//! - **Views**: [`GameStatus`], [`MoveEntry`] and [`GameView`] for presenters
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, GameStatus, Player};
//!
//! let game = GameHistory::replay(&[0, 3, 1, 4, 2]).unwrap();
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//!
//! // Rewind two moves and take a different branch.
//! let game = game.jump_to(3).unwrap().apply_move(8).unwrap();
//! assert_eq!(game.len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Intent, MoveError};
pub use contracts::{Contract, JumpContract, LegalMove, MoveContract};
pub use game::GameHistory;
pub use invariants::{
    AlternatingMarksInvariant, CursorInRangeInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, SingleMarkPerStepInvariant,
};
pub use position::Position;
pub use rules::{
    Outcome, WIN_LINES, WinLine, check_winner, evaluate, is_draw, is_full, winning_line,
};
pub use types::{Board, Player, Square};
pub use view::{GameStatus, GameView, MoveEntry};
