//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark
//! went where and make up the history a board state is replayed from.

use super::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move was not accepted.
///
/// Rejections are routine: the machine drops the move without changing
/// state. This type only exists so callers can log or display the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has concluded and is waiting for a reset.
    #[display("Game is over")]
    GameOver,
}
