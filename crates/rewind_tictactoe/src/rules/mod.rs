//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or turns, so the engine and any presenter can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Outcome, WIN_LINES, WinLine, check_winner, evaluate, winning_line};
