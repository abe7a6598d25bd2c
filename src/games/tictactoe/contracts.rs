//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveRejection;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::state::GameState;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still accept moves.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the outcome is terminal.
    pub fn check(state: &GameState) -> Result<(), MoveRejection> {
        if state.is_accepting_moves() {
            Ok(())
        } else {
            Err(MoveRejection::GameOver)
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails on an occupied square.
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveRejection> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing the current mark.
///
/// Preconditions:
/// - Game still accepts moves
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one square was filled
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveRejection> {
        GameNotOver::check(state)?;
        SquareIsEmpty::check(*pos, state)
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match TicTacToeInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if after.board().filled() != before.board().filled() + 1 {
            violations.push(InvariantViolation::new("Exactly one square filled per move"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for v in &violations {
                warn!(invariant = %v.description, "Postcondition failed");
            }
            Err(violations)
        }
    }
}
