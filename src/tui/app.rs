//! Application state and key handling.

use crate::games::tictactoe::{Mark, Outcome, Position};
use crate::session::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, instrument};

use super::input::{key_position, move_cursor};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys drive the board.
    Playing,
    /// Keys edit a player's name.
    EditingName {
        /// Whose name is being edited.
        mark: Mark,
        /// Text typed so far.
        buffer: String,
    },
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    mode: Mode,
    status: String,
}

impl App {
    /// Wraps a session with the cursor on the center square.
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            cursor: Position::Center,
            mode: Mode::Playing,
            status: String::new(),
        };
        app.status = app.turn_status();
        app
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    fn turn_status(&self) -> String {
        let mark = self.session.to_move();
        format!("{} ({}) to move", self.session.player(mark).name(), mark)
    }

    fn outcome_status(&self) -> String {
        match self.session.outcome() {
            Outcome::InProgress => self.turn_status(),
            Outcome::Won(mark) => format!(
                "{} wins! Press 'r' to play again.",
                self.session.player(mark).name()
            ),
            Outcome::Draw => "Draw! Press 'r' to play again.".to_string(),
        }
    }

    /// Handles one key press.
    ///
    /// Ctrl+C quits from any mode. Other control chords are ignored.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => AppAction::Quit,
                _ => AppAction::Continue,
            };
        }

        match self.mode {
            Mode::Playing => self.handle_playing_key(key.code),
            Mode::EditingName { .. } => {
                self.handle_editing_key(key.code);
                AppAction::Continue
            }
        }
    }

    fn handle_playing_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = key_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('r') => {
                self.session.reset_game();
                self.status = format!("New game. {}", self.turn_status());
            }
            KeyCode::Char('e') => self.start_editing(Mark::X),
            KeyCode::Char('E') => self.start_editing(Mark::O),
            KeyCode::Char('c') => self.clear_tally(Mark::X),
            KeyCode::Char('C') => self.clear_tally(Mark::O),
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_editing_key(&mut self, key: KeyCode) {
        let Mode::EditingName { mark, buffer } = &mut self.mode else {
            return;
        };
        let mark = *mark;

        match key {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let raw = std::mem::take(buffer);
                self.mode = Mode::Playing;
                let stored = self.session.rename_player(mark, &raw).to_string();
                self.status = format!("{} is now {}", mark, stored);
            }
            KeyCode::Esc => {
                self.mode = Mode::Playing;
                self.status = self.outcome_status();
            }
            _ => {}
        }
    }

    fn start_editing(&mut self, mark: Mark) {
        debug!(%mark, "Editing name");
        self.mode = Mode::EditingName {
            mark,
            buffer: self.session.player(mark).name().clone(),
        };
        self.status = "Type a name, Enter to save, Esc to cancel".to_string();
    }

    fn clear_tally(&mut self, mark: Mark) {
        self.session.reset_tally(mark);
        self.status = format!("{}'s wins reset", self.session.player(mark).name());
    }

    fn play(&mut self, pos: Position) {
        if let Err(rejection) = self.session.check_move(pos) {
            self.status = match self.session.outcome() {
                Outcome::InProgress => rejection.to_string(),
                _ => self.outcome_status(),
            };
            return;
        }

        if self.session.play(pos).is_some() {
            self.status = self.outcome_status();
        }
    }
}
