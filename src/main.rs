//! tictactoe_duel - unified CLI
//!
//! Plays two-player tic-tac-toe in the terminal, or replays a move list
//! headlessly.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_duel::{
    parse_moves, replay, run_tui, Cli, Command, Mark, Outcome, Session, SessionConfig,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        None => run_play(config, None),
        Some(Command::Play { log_file }) => run_play(config, log_file),
        Some(Command::Replay { moves, json }) => run_replay(config, &moves, json),
    }
}

/// Reads the config file, then applies command-line overrides.
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = SessionConfig::load(cli.config.as_deref())
        .context("Failed to load session config")?;

    if let Some(name) = &cli.player_x {
        config = config.with_name(Mark::X, name.clone());
    }
    if let Some(name) = &cli.player_o {
        config = config.with_name(Mark::O, name.clone());
    }
    Ok(config)
}

/// Run the terminal UI.
fn run_play(config: SessionConfig, log_file: Option<PathBuf>) -> Result<()> {
    let config = match log_file {
        Some(path) => config.with_log_file(path),
        None => config,
    };
    let log_file = config.log_file().clone();

    run_tui(Session::new(config), &log_file)
}

/// Play the given moves and print the result.
#[instrument(skip(config))]
fn run_replay(config: SessionConfig, moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let positions = parse_moves(moves)?;
    let mut session = Session::new(config);
    let report = replay(&mut session, &positions);
    info!(
        played = report.snapshot.history.len(),
        rejected = report.rejected.len(),
        "Replay finished"
    );

    for (pos, reason) in &report.rejected {
        eprintln!("skipped {}: {}", pos, reason);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report.snapshot)?);
        return Ok(());
    }

    println!("{}\n", report.snapshot.board().display());
    println!("{}", report.snapshot.status_string());
    if report.snapshot.outcome == Outcome::InProgress {
        println!("(game unfinished)");
    }
    for player in &report.snapshot.players {
        println!("{} ({}): {} wins", player.name(), player.mark(), player.wins());
    }
    Ok(())
}
