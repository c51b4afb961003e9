//! Text rendering of engine views.

use crate::config::{DisplayConfig, EmptyCell};
use rewind_tictactoe::{Board, GameView};

/// Draws the board as a 3x3 grid.
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    match display.empty_cell() {
        EmptyCell::Numbered => board.display(),
        EmptyCell::Dot => board.render(|_| '.'),
        EmptyCell::Blank => board.render(|_| ' '),
    }
}

/// Draws board, status line and (optionally) the move list.
pub fn render_view(view: &GameView, display: &DisplayConfig) -> String {
    let mut out = render_board(&view.board, display);
    out.push_str("\n\n");
    out.push_str(&view.status.to_string());
    if *display.show_moves() {
        out.push('\n');
        for entry in &view.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("\n{} {}. {}", marker, entry.step, entry.label));
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RewindConfig;
    use rewind_tictactoe::GameHistory;

    #[test]
    fn test_numbered_board_shows_indices() {
        let game = GameHistory::replay(&[0, 4]).unwrap();
        let config = RewindConfig::default();
        assert_eq!(
            render_board(game.current_board(), config.display()),
            "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8"
        );
    }

    #[test]
    fn test_view_lists_moves_with_cursor() {
        let game = GameHistory::replay(&[4, 0]).unwrap().jump_to(1).unwrap();
        let text = render_view(&game.view(), RewindConfig::default().display());

        assert!(text.contains("Next player: O"));
        assert!(text.contains("  0. Go to game start"));
        assert!(text.contains("> 1. Go to move #1"));
        assert!(text.contains("  2. Go to move #2"));
    }
}
