//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from board
//! storage so the machine, invariants and UI can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, LINES};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// Checks the three rows, the three columns, then both diagonals.
/// A winning line decides the outcome; otherwise a full board is a
/// draw and anything else is still in progress.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Square};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(compute_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_alternating_rows_board_is_draw() {
        // A B A / B A B / B A B
        let a = Square::Occupied(Mark::X);
        let b = Square::Occupied(Mark::O);
        let board = Board::from_squares([a, b, a, b, a, b, b, a, b]);
        assert_eq!(compute_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_column_win() {
        let o = Square::Occupied(Mark::O);
        let e = Square::Empty;
        let board = Board::from_squares([e, o, e, e, o, e, e, o, e]);
        assert_eq!(compute_outcome(&board), Outcome::Won(Mark::O));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let x = Square::Occupied(Mark::X);
        let o = Square::Occupied(Mark::O);
        let board = Board::from_squares([x, o, o, o, x, x, o, x, x]);
        assert_eq!(compute_outcome(&board), Outcome::Won(Mark::X));
    }
}
