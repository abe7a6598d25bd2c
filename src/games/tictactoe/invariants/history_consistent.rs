//! History consistency invariant: history length matches occupied squares.

use super::super::GameState;
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().len() == state.board().filled()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
