//! Command-line interface for tictactoe_duel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe with session win tallies
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name for the player holding X
    #[arg(long, global = true)]
    pub player_x: Option<String>,

    /// Name for the player holding O
    #[arg(long, global = true)]
    pub player_o: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Log file (overrides the config)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play a sequence of moves headlessly and print the result
    Replay {
        /// Squares as `row,col` (zero-based) or key numbers 1-9
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}
