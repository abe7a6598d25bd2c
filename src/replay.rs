//! Headless play from a list of squares.

use crate::games::tictactoe::{MoveRejection, Position};
use crate::session::Session;
use crate::snapshot::SessionSnapshot;
use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// A move argument that names no square.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Not a square: {:?} (use row,col from 0,0 to 2,2 or 1-9)", input)]
pub struct MoveParseError {
    /// The offending argument.
    pub input: String,
}

/// Parses every argument with [`Position::parse`].
pub fn parse_moves<S: AsRef<str>>(args: &[S]) -> Result<Vec<Position>, MoveParseError> {
    args.iter()
        .map(|arg| {
            Position::parse(arg.as_ref()).ok_or_else(|| MoveParseError {
                input: arg.as_ref().to_string(),
            })
        })
        .collect()
}

/// What happened when a move list was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// Session state after the last move.
    pub snapshot: SessionSnapshot,
    /// Moves that were ignored, with the reason.
    pub rejected: Vec<(Position, MoveRejection)>,
}

/// Plays `moves` in order on `session`.
///
/// Rejected moves are skipped and reported; play continues with the next.
#[instrument(skip(session))]
pub fn replay(session: &mut Session, moves: &[Position]) -> ReplayReport {
    let mut rejected = Vec::new();
    for &pos in moves {
        if let Err(reason) = session.check_move(pos) {
            warn!(%pos, %reason, "Skipping move");
            rejected.push((pos, reason));
            continue;
        }
        session.play(pos);
    }

    ReplayReport {
        snapshot: session.snapshot(),
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Outcome};

    #[test]
    fn test_parse_mixed_forms() {
        let moves = parse_moves(&["0,0", "5", "2,2"]).unwrap();
        assert_eq!(
            moves,
            vec![Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = parse_moves(&["1", "3,3"]).unwrap_err();
        assert_eq!(err.input, "3,3");
    }

    #[test]
    fn test_replay_skips_rejections() {
        let mut session = Session::default();
        let moves = parse_moves(&["1", "1", "5", "2", "4", "3", "9"]).unwrap();
        let report = replay(&mut session, &moves);

        assert_eq!(report.snapshot.outcome, Outcome::Won(Mark::X));
        assert_eq!(
            report.rejected,
            vec![
                (Position::TopLeft, MoveRejection::SquareOccupied(Position::TopLeft)),
                (Position::BottomRight, MoveRejection::GameOver),
            ]
        );
    }
}
