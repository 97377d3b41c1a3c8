//! Game error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Category of a game error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum GameErrorKind {
    /// A caller passed an index outside the valid range.
    #[display("Invalid argument")]
    InvalidArgument,
    /// A transition broke a history invariant.
    #[display("Invariant violation")]
    InvariantViolation,
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{}: {} at {}:{}", kind, message, file, line)]
pub struct GameError {
    /// Error category.
    pub kind: GameErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: GameErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates an [`GameErrorKind::InvalidArgument`] error.
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidArgument, message)
    }

    /// Creates an [`GameErrorKind::InvariantViolation`] error.
    #[track_caller]
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvariantViolation, message)
    }

    /// Returns the error category.
    pub fn kind(&self) -> GameErrorKind {
        self.kind
    }
}
