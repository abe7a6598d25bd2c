//! Immutable-per-step game state.
//!
//! Every accepted move produces a new [`GameState`] value; rejected moves
//! leave the caller holding the old one.

use super::action::{Move, MoveRejection};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::{Board, Mark, Outcome, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete state of one game on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) to_move: Mark,
    pub(super) outcome: Outcome,
    pub(super) accepting_moves: bool,
    pub(super) history: Vec<Move>,
}

impl GameState {
    /// Empty board, X to move, in progress, accepting moves.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            accepting_moves: true,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose move is accepted next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Outcome derived after the last accepted move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// False once the outcome is terminal.
    pub fn is_accepting_moves(&self) -> bool {
        self.accepting_moves
    }

    /// Accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty squares, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.accepting_moves {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Reports whether a move at `pos` would be accepted.
    pub fn check_move(&self, pos: Position) -> Result<(), MoveRejection> {
        MoveContract::pre(self, &pos)
    }

    /// Returns the state after placing the current mark at `pos`.
    ///
    /// The mark is written, the outcome recomputed, and the turn passes to
    /// the opponent only while the game stays in progress.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn with_move(&self, pos: Position) -> Result<GameState, MoveRejection> {
        self.check_move(pos)?;

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(self.to_move));
        next.history.push(Move::new(self.to_move, pos));

        next.outcome = rules::compute_outcome(&next.board);
        if next.outcome.is_terminal() {
            next.accepting_moves = false;
        } else {
            next.to_move = self.to_move.opponent();
        }

        Ok(next)
    }

    /// Replays positions from a fresh game, stopping at the first rejection.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<GameState, MoveRejection> {
        positions
            .iter()
            .try_fold(GameState::new(), |state, pos| state.with_move(*pos))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
