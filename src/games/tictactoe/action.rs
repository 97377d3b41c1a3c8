//! First-class action types for tic-tac-toe.
//!
//! Actions are the two writes a front end can make: play a cell, or jump
//! to a recorded position. They can be parsed, serialized into scripts and
//! logged independently of the game they are applied to.

use super::error::GameError;
use super::position::Position;
use super::types::{GameStatus, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A user action against a game.
///
/// Indices are kept raw so that out-of-range values reach the game and are
/// rejected there, the same way a misbehaving front end would send them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Place the current player's mark on a cell (0-8).
    #[display("play:{}", _0)]
    Play(usize),
    /// Move the cursor to a history index.
    #[display("jump:{}", _0)]
    JumpTo(usize),
}

impl FromStr for Action {
    type Err = GameError;

    /// Parses `play:<cell>` or `jump:<index>`.
    ///
    /// Cells may be given by number or by label, e.g. `play:center`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = s.trim().split_once(':').ok_or_else(|| {
            GameError::invalid_argument(format!(
                "expected play:<cell> or jump:<index>, got {:?}",
                s
            ))
        })?;

        match verb.trim().to_ascii_lowercase().as_str() {
            "play" => Position::from_label_or_number(arg)
                .map(|pos| Action::Play(pos.to_index()))
                .or_else(|| arg.trim().parse().ok().map(Action::Play))
                .ok_or_else(|| GameError::invalid_argument(format!("unknown cell {:?}", arg))),
            "jump" => arg
                .trim()
                .parse()
                .map(Action::JumpTo)
                .map_err(|e| GameError::invalid_argument(format!("bad history index {:?}: {}", arg, e))),
            other => Err(GameError::invalid_argument(format!("unknown action {:?}", other))),
        }
    }
}

/// Why a move left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum IgnoredReason {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
    /// The selected position already has a winner.
    #[display("{} has already won", _0)]
    GameOver(Player),
}

/// Result of asking the game to place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The mark was placed and a new snapshot recorded.
    Played {
        /// The mark that was placed.
        mark: Player,
        /// Where it was placed.
        position: Position,
        /// Status of the new position.
        status: GameStatus,
    },
    /// The move was illegal and the game was left as it was.
    Ignored(IgnoredReason),
}

impl MoveOutcome {
    /// Returns `true` if a snapshot was recorded.
    pub fn is_played(&self) -> bool {
        matches!(self, MoveOutcome::Played { .. })
    }
}

/// Result of dispatching an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionOutcome {
    /// Outcome of a [`Action::Play`].
    Move(MoveOutcome),
    /// The cursor moved to `index`.
    Jumped {
        /// New cursor position.
        index: usize,
        /// Status of the selected position.
        status: GameStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameErrorKind;

    #[test]
    fn test_parse_play_by_number_and_label() {
        assert_eq!("play:4".parse::<Action>().unwrap(), Action::Play(4));
        assert_eq!("play:top-right".parse::<Action>().unwrap(), Action::Play(2));
        assert_eq!(" PLAY : 0 ".parse::<Action>().unwrap(), Action::Play(0));
    }

    #[test]
    fn test_parse_keeps_out_of_range_cell() {
        assert_eq!("play:12".parse::<Action>().unwrap(), Action::Play(12));
    }

    #[test]
    fn test_parse_jump() {
        assert_eq!("jump:0".parse::<Action>().unwrap(), Action::JumpTo(0));
        assert_eq!(Action::JumpTo(3).to_string(), "jump:3");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["play", "jump:-1", "undo:1", "play:nowhere"] {
            let err = input.parse::<Action>().unwrap_err();
            assert_eq!(err.kind(), GameErrorKind::InvalidArgument, "{}", input);
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let action = Action::Play(7);
        assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
    }

    #[test]
    fn test_ignored_reason_display() {
        let reason = IgnoredReason::SquareOccupied(Position::Center);
        assert_eq!(reason.to_string(), "Center is already occupied");
        assert_eq!(IgnoredReason::GameOver(Player::X).to_string(), "X has already won");
    }
}
