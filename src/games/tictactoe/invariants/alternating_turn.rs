//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: Marks alternate turns.
///
/// History must show X, O, X, O, ... starting with X, and the turn
/// marker must name the mark after the last move, unless that move
/// ended the game, in which case it still names the mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(last) = history.last() else {
            return state.to_move() == Mark::X;
        };

        if history[0].mark != Mark::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected = if state.outcome().is_terminal() {
            last.mark
        } else {
            last.mark.opponent()
        };
        state.to_move() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let state = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.to_move(), Mark::O);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut state = GameState::new();
        state.history = vec![
            Move::new(Mark::X, Position::TopLeft),
            Move::new(Mark::X, Position::Center),
        ];
        state.to_move = Mark::O;
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
