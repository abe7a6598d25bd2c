//! Cross-game session state: player names, win tallies and resets.

use crate::config::SessionConfig;
use crate::games::tictactoe::{
    rules, BoardEvent, BoardMachine, GameState, Mark, MoveRejection, Outcome, Position,
};
use crate::snapshot::SessionSnapshot;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One of the two players in a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display name.
    name: String,
    /// Mark held for the whole session.
    mark: Mark,
    /// Games won since the session started or the tally was cleared.
    wins: u32,
}

impl PlayerProfile {
    fn new(name: String, mark: Mark) -> Self {
        Self {
            name,
            mark,
            wins: 0,
        }
    }
}

/// Applies the display-name policy.
///
/// Surrounding whitespace is trimmed and a name left empty falls back to
/// `fallback`. The result is truncated to `max_len` characters.
pub fn normalize_name(raw: &str, fallback: &str, max_len: usize) -> String {
    let trimmed = match raw.trim() {
        "" => fallback.trim(),
        name => name,
    };
    trimmed.chars().take(max_len).collect::<String>().trim_end().to_string()
}

/// Configured name for `mark`, or the built-in one when that is blank.
fn starting_name(config: &SessionConfig, mark: Mark) -> String {
    let builtin = SessionConfig::default();
    normalize_name(
        config.default_name(mark),
        builtin.default_name(mark),
        *config.max_name_len(),
    )
}

/// The session controller.
///
/// Owns the board machine for the current game plus state that outlives
/// it. A win is counted at most once per game: `win_recorded` flips in the
/// same step as the tally increment and only `reset_game` clears it.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: BoardMachine,
    players: [PlayerProfile; 2],
    accepting_moves: bool,
    win_recorded: bool,
}

impl Session {
    /// Starts a session with names taken from `config`.
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig) -> Self {
        let players = [
            PlayerProfile::new(starting_name(&config, Mark::X), Mark::X),
            PlayerProfile::new(starting_name(&config, Mark::O), Mark::O),
        ];
        info!(player_x = %players[0].name, player_o = %players[1].name, "Session started");

        Self {
            config,
            board: BoardMachine::new(),
            players,
            accepting_moves: true,
            win_recorded: false,
        }
    }

    fn slot(mark: Mark) -> usize {
        match mark {
            Mark::X => 0,
            Mark::O => 1,
        }
    }

    /// Returns the profile holding `mark`.
    pub fn player(&self, mark: Mark) -> &PlayerProfile {
        &self.players[Self::slot(mark)]
    }

    /// Both profiles, X first.
    pub fn players(&self) -> &[PlayerProfile; 2] {
        &self.players
    }

    /// Current game state.
    pub fn game(&self) -> &GameState {
        self.board.state()
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// The mark whose move is accepted next.
    pub fn to_move(&self) -> Mark {
        self.board.to_move()
    }

    /// False from a win or draw until the next `reset_game`.
    pub fn is_accepting_moves(&self) -> bool {
        self.accepting_moves
    }

    /// True while the game is in progress and it is `mark`'s turn.
    pub fn is_active(&self, mark: Mark) -> bool {
        self.outcome() == Outcome::InProgress && self.to_move() == mark
    }

    /// The line that decided a won game.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.board.board()).map(|(_, line)| line)
    }

    /// Reports whether a move at `pos` would be accepted.
    pub fn check_move(&self, pos: Position) -> Result<(), MoveRejection> {
        if !self.accepting_moves {
            return Err(MoveRejection::GameOver);
        }
        self.board.state().check_move(pos)
    }

    /// Plays the current mark at `pos`.
    ///
    /// Rejected moves return `None` and change nothing. An outcome change
    /// is handed to [`Session::on_board_outcome_changed`] before returning.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Option<BoardEvent> {
        if !self.accepting_moves {
            debug!("Session not accepting moves");
            return None;
        }

        let event = self.board.apply_move(pos)?;
        if let Some(outcome) = event.outcome_changed {
            self.on_board_outcome_changed(outcome);
        }
        Some(event)
    }

    /// Reacts to a new board outcome.
    ///
    /// A win increments the winner's tally once per game no matter how
    /// often it is reported. Win and draw both stop accepting moves.
    #[instrument(skip(self))]
    pub fn on_board_outcome_changed(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(mark) => {
                if self.win_recorded {
                    debug!(%mark, "Win already recorded");
                    return;
                }
                self.win_recorded = true;
                let player = &mut self.players[Self::slot(mark)];
                player.wins += 1;
                self.accepting_moves = false;
                info!(%mark, name = %player.name, wins = player.wins, "Win recorded");
            }
            Outcome::Draw => {
                self.accepting_moves = false;
                info!("Game drawn");
            }
            Outcome::InProgress => {}
        }
    }

    /// Starts a fresh game, keeping names and tallies.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.win_recorded = false;
        self.accepting_moves = true;
        self.board.reset();
        info!("New game");
    }

    /// Clears one player's tally.
    #[instrument(skip(self))]
    pub fn reset_tally(&mut self, mark: Mark) {
        let player = &mut self.players[Self::slot(mark)];
        debug!(previous = player.wins, "Clearing tally");
        player.wins = 0;
    }

    /// Renames a player under the name policy, returning the stored name.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, mark: Mark, name: &str) -> &str {
        let fallback = starting_name(&self.config, mark);
        let stored = normalize_name(name, &fallback, *self.config.max_name_len());
        let player = &mut self.players[Self::slot(mark)];
        info!(from = %player.name, to = %stored, "Player renamed");
        player.name = stored;
        &player.name
    }

    /// Captures the session as a serializable value.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
