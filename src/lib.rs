//! Two-player tic-tac-toe library
//!
//! A board state machine with win/draw detection, a session controller
//! that keeps player names and win tallies across games, and a terminal
//! front-end.
//!
//! # Architecture
//!
//! - **Board**: [`BoardMachine`] applies moves and derives the [`Outcome`]
//! - **Session**: [`Session`] records wins once per game and handles resets
//! - **TUI**: [`run_tui`] drives a session from the keyboard
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{Mark, Outcome, Position, Session};
//!
//! let mut session = Session::default();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleLeft,
//!     Position::TopRight,
//! ] {
//!     session.play(pos);
//! }
//! assert_eq!(session.outcome(), Outcome::Won(Mark::X));
//! assert_eq!(*session.player(Mark::X).wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
mod replay;
mod session;
mod snapshot;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    compute_outcome, invariants, rules, Board, BoardEvent, BoardMachine, Contract, GameNotOver,
    GameState, Mark, Move, MoveContract, MoveRejection, Outcome, Position, Square, SquareIsEmpty,
};

// Crate-level exports - Headless replay
pub use replay::{parse_moves, replay, MoveParseError, ReplayReport};

// Crate-level exports - Session management
pub use session::{normalize_name, PlayerProfile, Session};
pub use snapshot::SessionSnapshot;

// Crate-level exports - Terminal UI
pub use tui::{run_tui, App, AppAction, Mode};
