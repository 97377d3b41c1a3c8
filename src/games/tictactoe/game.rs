//! Game state with move history and time-travel.
//!
//! [`GameState`] owns the board history and the cursor into it. Everything
//! else (turn, winner, status) is derived from the snapshot under the
//! cursor on every read.

use super::action::{Action, ActionOutcome, IgnoredReason, MoveOutcome};
use super::error::GameError;
use super::history::History;
use super::position::Position;
use super::rules::check_winner;
use super::types::{Board, GameStatus, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};

/// Authoritative tic-tac-toe state: snapshots plus the selected move.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    pub(super) history: History,
}

impl GameState {
    /// Creates a new game at the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Replays actions from a fresh game, stopping at the first error.
    #[instrument(skip(actions), fields(count = actions.len()))]
    pub fn replay(actions: &[Action]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for action in actions {
            game.dispatch(*action)?;
        }
        Ok(game)
    }

    /// Places the current player's mark on `cell_index`.
    ///
    /// If the selected position already has a winner, or the cell is taken,
    /// nothing changes and [`MoveOutcome::Ignored`] is returned. Otherwise
    /// every snapshot after the cursor is discarded, the new board is
    /// appended and the cursor moves onto it.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `cell_index` is outside 0-8.
    /// In debug builds, returns an `InvariantViolation` error if the new
    /// history breaks an invariant.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<MoveOutcome, GameError> {
        let position = Position::try_from(cell_index)?;
        let board = self.history.current();

        if let Some(winner) = check_winner(board) {
            debug!(%winner, "Ignoring move on a won position");
            return Ok(MoveOutcome::Ignored(IgnoredReason::GameOver(winner)));
        }

        if !board.is_empty(position) {
            debug!(%position, "Ignoring move on an occupied square");
            return Ok(MoveOutcome::Ignored(IgnoredReason::SquareOccupied(position)));
        }

        let mark = self.current_turn();
        let next = board.with_mark(position, mark);
        self.history.record(next);

        #[cfg(debug_assertions)]
        self.verify_invariants()?;

        let status = self.status();
        info!(%mark, %position, move_number = self.history.cursor(), ?status, "Move played");
        Ok(MoveOutcome::Played {
            mark,
            position,
            status,
        })
    }

    /// Selects the snapshot at `index`. History is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `index` is not below
    /// [`GameState::move_count`]; the cursor does not move.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn jump_to_move(&mut self, index: usize) -> Result<(), GameError> {
        self.history.jump_to(index)?;
        debug!(index, "Jumped to move");
        Ok(())
    }

    /// Applies an action and reports what happened.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<ActionOutcome, GameError> {
        match action {
            Action::Play(cell) => self.apply_move(cell).map(ActionOutcome::Move),
            Action::JumpTo(index) => {
                self.jump_to_move(index)?;
                Ok(ActionOutcome::Jumped {
                    index,
                    status: self.status(),
                })
            }
        }
    }

    /// Returns the board at the selected move.
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// Returns the player to move: X on even moves, O on odd ones.
    pub fn current_turn(&self) -> Player {
        Player::to_move_at(self.history.cursor())
    }

    /// Returns the winner of the board at the selected move, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Returns the status of the board at the selected move.
    pub fn status(&self) -> GameStatus {
        self.winner().map_or(GameStatus::InProgress, GameStatus::Won)
    }

    /// Number of recorded positions, including the starting board.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Index of the selected move.
    pub fn current_move(&self) -> usize {
        self.history.cursor()
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the cells the current player may play.
    ///
    /// Empty once the selected position has a winner.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    #[cfg(debug_assertions)]
    fn verify_invariants(&self) -> Result<(), GameError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::invariant_violation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
