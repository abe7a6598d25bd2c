//! Serializable view of a session.

use crate::games::tictactoe::{Board, Mark, Move, Outcome, Square};
use crate::session::{PlayerProfile, Session};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything a front-end shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Squares in row-major order; `None` for empty.
    pub board: Vec<Option<Mark>>,
    /// The mark whose move is accepted next.
    pub to_move: Mark,
    /// Current outcome.
    pub outcome: Outcome,
    /// Whether moves are accepted.
    pub accepting_moves: bool,
    /// Both players, X first.
    pub players: Vec<PlayerProfile>,
    /// Accepted moves of the current game.
    pub history: Vec<Move>,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        let game = session.game();
        Self {
            board: game.board().squares().iter().map(|s| s.mark()).collect(),
            to_move: game.to_move(),
            outcome: game.outcome(),
            accepting_moves: session.is_accepting_moves(),
            players: session.players().to_vec(),
            history: game.history().to_vec(),
        }
    }
}

impl SessionSnapshot {
    /// Rebuilds the board.
    pub fn board(&self) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, mark) in squares.iter_mut().zip(&self.board) {
            if let Some(mark) = mark {
                *square = Square::Occupied(*mark);
            }
        }
        Board::from_squares(squares)
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        let name = |mark: Mark| {
            self.players
                .iter()
                .find(|p| *p.mark() == mark)
                .map(|p| p.name().as_str())
                .unwrap_or("?")
        };
        match self.outcome {
            Outcome::InProgress => format!("{} ({}) to move", name(self.to_move), self.to_move),
            Outcome::Won(mark) => format!("{} ({}) wins!", name(mark), mark),
            Outcome::Draw => "Draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_snapshot_of_fresh_session() {
        let snapshot = Session::default().snapshot();
        assert_eq!(snapshot.board, vec![None; 9]);
        assert_eq!(snapshot.to_move, Mark::X);
        assert!(snapshot.accepting_moves);
        assert_eq!(snapshot.status_string(), "Player 1 (X) to move");
    }

    #[test]
    fn test_snapshot_board_matches_session() {
        let mut session = Session::default();
        session.play(Position::Center);
        session.play(Position::TopLeft);

        let snapshot = session.snapshot();
        assert_eq!(&snapshot.board(), session.game().board());
        assert_eq!(snapshot.history.len(), 2);
        assert_eq!(snapshot.status_string(), "Player 1 (X) to move");
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let snapshot = Session::default().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["to_move"], "X");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["players"][1]["name"], "Player 2");

        let back: SessionSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }
}
