mod action;
mod contracts;
pub mod invariants;
mod machine;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveRejection};
pub use contracts::{Contract, GameNotOver, MoveContract, SquareIsEmpty};
pub use machine::{BoardEvent, BoardMachine};
pub use position::Position;
pub use rules::compute_outcome;
pub use state::GameState;
pub use types::{Board, Mark, Outcome, Square};
