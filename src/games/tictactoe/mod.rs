//! Tic-tac-toe with move history and time-travel.

mod action;
mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Action, ActionOutcome, IgnoredReason, MoveOutcome};
pub use error::{GameError, GameErrorKind};
pub use game::GameState;
pub use history::History;
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, SingleCellDeltaInvariant,
};
pub use position::Position;
pub use rules::{WIN_LINES, check_winner, winning_line};
pub use types::{Board, GameStatus, Player, Square};
pub use view::{GameView, MoveEntry};

/// Alias used where the player is thought of as the symbol on the board.
pub type Mark = Player;
