//! Tests for tic-tac-toe position enum.

use tictactoe_duel::{Board, GameState, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_row_col_mapping() {
    assert_eq!(Position::from_row_col(0, 2), Some(Position::TopRight));
    assert_eq!(Position::from_row_col(2, 0), Some(Position::BottomLeft));
    assert_eq!(Position::MiddleRight.row(), 1);
    assert_eq!(Position::MiddleRight.col(), 2);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let state = GameState::replay(&[Position::TopLeft, Position::Center]).unwrap();

    let valid = state.valid_moves();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
