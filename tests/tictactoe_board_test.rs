//! Tests for the board state machine and outcome rules.

use tictactoe_duel::rules::LINES;
use tictactoe_duel::{
    compute_outcome, Board, BoardMachine, GameState, Mark, Outcome, Position, Square,
};

fn board_from(marks: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, c) in squares.iter_mut().zip(marks.chars()) {
        *square = match c {
            'X' => Square::Occupied(Mark::X),
            'O' => Square::Occupied(Mark::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

#[test]
fn test_uniform_line_wins_for_its_mark() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let mut squares = [Square::Empty; 9];
            for pos in line {
                squares[pos.to_index()] = Square::Occupied(mark);
            }
            assert_eq!(
                compute_outcome(&Board::from_squares(squares)),
                Outcome::Won(mark),
                "line {:?}",
                line
            );
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(compute_outcome(&board_from("XOXOXOOXO")), Outcome::Draw);
    assert_eq!(compute_outcome(&board_from("OXOXOXXOX")), Outcome::Draw);
}

#[test]
fn test_partial_board_without_line_in_progress() {
    assert_eq!(compute_outcome(&board_from("XO..X....")), Outcome::InProgress);
}

#[test]
fn test_turn_alternates_only_while_in_progress() {
    let mut machine = BoardMachine::new();
    let moves = [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleLeft,
    ];

    let mut expected = Mark::X;
    for pos in moves {
        assert_eq!(machine.to_move(), expected);
        machine.apply_move(pos).expect("legal move");
        expected = expected.opponent();
        assert_eq!(machine.to_move(), expected);
    }

    let event = machine.apply_move(Position::TopRight).expect("winning move");
    assert_eq!(event.outcome_changed, Some(Outcome::Won(Mark::X)));
    assert_eq!(machine.to_move(), Mark::X);
}

#[test]
fn test_drawing_move_keeps_turn() {
    // X: 1 3 5 6 8, O: 0 2 4 7 by index
    let order = [1, 0, 3, 2, 5, 4, 6, 7, 8];
    let mut machine = BoardMachine::new();
    for (i, idx) in order.into_iter().enumerate() {
        let pos = Position::from_index(idx).unwrap();
        let event = machine.apply_move(pos).expect("legal move");
        if i < 8 {
            assert_eq!(event.outcome_changed, None);
        } else {
            assert_eq!(event.outcome_changed, Some(Outcome::Draw));
        }
    }
    assert_eq!(machine.to_move(), Mark::X);
    assert!(!machine.is_accepting_moves());
}

#[test]
fn test_rejected_moves_leave_state_unchanged() {
    let mut machine = BoardMachine::new();
    machine.apply_move(Position::Center);
    let before = machine.state().clone();

    assert!(machine.apply_move(Position::Center).is_none());
    assert_eq!(machine.state(), &before);

    let won = GameState::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomRight,
        Position::TopRight,
    ])
    .unwrap();
    assert_eq!(won.outcome(), Outcome::Won(Mark::X));
    assert!(won.with_move(Position::BottomLeft).is_err());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut machine = BoardMachine::new();
    machine.apply_move(Position::Center);
    machine.apply_move(Position::TopLeft);
    machine.reset();

    assert_eq!(machine.board(), &Board::new());
    assert_eq!(machine.to_move(), Mark::X);
    assert_eq!(machine.outcome(), Outcome::InProgress);
    assert!(machine.is_accepting_moves());
    assert!(machine.state().history().is_empty());
}

fn line_owner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        let mark = board.get(line[0]).mark()?;
        line.iter()
            .all(|&pos| board.get(pos) == Square::Occupied(mark))
            .then_some(mark)
    })
}

/// Plays every continuation of `machine`, returning the number of finished games.
fn walk_games(machine: &BoardMachine) -> usize {
    let mut finished = 0;
    for pos in Position::ALL {
        let mover = machine.to_move();
        let mut next = machine.clone();
        let Some(event) = next.apply_move(pos) else {
            assert_eq!(next.state(), machine.state(), "rejected move at {} changed state", pos);
            continue;
        };

        let expected = match line_owner(next.board()) {
            Some(mark) => Outcome::Won(mark),
            None if next.board().squares().iter().all(|s| s.mark().is_some()) => Outcome::Draw,
            None => Outcome::InProgress,
        };
        assert_eq!(next.outcome(), expected, "board\n{}", next.board().display());

        if expected == Outcome::InProgress {
            assert_eq!(event.outcome_changed, None);
            assert_eq!(next.to_move(), mover.opponent());
            assert!(next.is_accepting_moves());
            finished += walk_games(&next);
        } else {
            assert_eq!(event.outcome_changed, Some(expected));
            assert_eq!(next.to_move(), mover);
            assert!(!next.is_accepting_moves());
            finished += 1;
        }
    }
    finished
}

#[test]
fn test_every_legal_game_follows_the_rules() {
    assert_eq!(walk_games(&BoardMachine::new()), 255_168);
}
