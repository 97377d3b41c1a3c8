//! Tic-tac-toe game state with move history and time-travel.
//!
//! The crate models the state behind a tic-tac-toe front end: the board
//! history, the selected move, and everything derived from them.
//!
//! # Architecture
//!
//! - **GameState**: history of board snapshots plus a cursor; applies moves
//!   and jumps
//! - **Rules**: the eight winning lines and winner detection
//! - **Invariants**: composable checks over history, verified after every
//!   move in debug builds
//! - **View**: the status line, cell text and move list a front end shows
//! - **Script**: TOML action scripts replayed against a fresh game
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, GameView, Player};
//!
//! # fn example() -> Result<(), tictactoe_timeline::GameError> {
//! let mut game = GameState::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     game.apply_move(cell)?;
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//!
//! // Go back to the opening and play a different line.
//! game.jump_to_move(1)?;
//! game.apply_move(8)?;
//! assert_eq!(game.move_count(), 3);
//! assert_eq!(GameView::from(&game).status(), "Next player: X");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod script;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionOutcome, AlternatingTurnInvariant, Board, CursorInBoundsInvariant, GameError,
    GameErrorKind, GameInvariants, GameState, GameStatus, GameView, History, IgnoredReason,
    Invariant, InvariantSet, InvariantViolation, Mark, MoveEntry, MoveOutcome, Player, Position,
    SingleCellDeltaInvariant, Square, WIN_LINES, check_winner, winning_line,
};

// Crate-level exports - Scripts
pub use script::{Script, ScriptError, ScriptReport};
