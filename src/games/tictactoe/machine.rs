//! Board state machine.
//!
//! Owns the current [`GameState`] and is its only mutator. Each accepted
//! move returns a [`BoardEvent`] for the session to observe.

use super::contracts::{Contract, MoveContract};
use super::state::GameState;
use super::{Board, Mark, Outcome, Position};
use tracing::{debug, info, instrument};

/// Emitted after an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEvent {
    /// The board after the move.
    pub board: Board,
    /// The new outcome, present only when the move changed it.
    pub outcome_changed: Option<Outcome>,
}

/// The 3x3 board, turn marker and derived outcome of one game.
#[derive(Debug, Clone, Default)]
pub struct BoardMachine {
    state: GameState,
}

impl BoardMachine {
    /// Creates a machine in the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The mark whose move is accepted next.
    pub fn to_move(&self) -> Mark {
        self.state.to_move()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// False once the game has concluded.
    pub fn is_accepting_moves(&self) -> bool {
        self.state.is_accepting_moves()
    }

    /// Places the current mark at `pos`.
    ///
    /// Returns `None` without touching state when the game is over or the
    /// square is taken.
    #[instrument(skip(self), fields(mark = %self.state.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Option<BoardEvent> {
        let next = match self.state.with_move(pos) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                return None;
            }
        };

        debug_assert!(
            MoveContract::post(&self.state, &next).is_ok(),
            "Move postcondition violated"
        );

        let before = self.state.outcome();
        self.state = next;
        let after = self.state.outcome();

        let outcome_changed = (after != before).then_some(after);
        if let Some(outcome) = outcome_changed {
            info!(%outcome, "Game concluded");
        }

        Some(BoardEvent {
            board: self.state.board().clone(),
            outcome_changed,
        })
    }

    /// Returns to the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.state.history().len(), "Resetting board");
        self.state = GameState::new();
    }
}
