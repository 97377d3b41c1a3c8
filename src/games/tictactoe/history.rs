//! Board history with a movable cursor.
//!
//! History is an append-only log of board snapshots plus a read cursor.
//! Recording a new board while the cursor sits in the past discards every
//! snapshot after the cursor first. Discarded branches are never kept.

use super::error::GameError;
use super::types::Board;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Ordered board snapshots and the index of the current one.
///
/// Index 0 is always the empty starting board, and the cursor always points
/// at an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(super) snapshots: Vec<Board>,
    pub(super) cursor: usize,
}

impl History {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Returns every snapshot in order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Iterates over snapshots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.snapshots.iter()
    }

    /// Returns `true` when the cursor is on the last snapshot.
    pub fn at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// Records `board` as the snapshot after the cursor.
    ///
    /// Snapshots past the cursor are dropped, `board` is appended and the
    /// cursor moves onto it.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn record(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots past cursor");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor to `index` without touching any snapshot.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `index` is not a recorded
    /// snapshot. The cursor is left where it was.
    #[track_caller]
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        if index >= self.snapshots.len() {
            warn!(index, "History index out of range");
            return Err(GameError::invalid_argument(format!(
                "history index {} is outside 0..{}",
                index,
                self.snapshots.len()
            )));
        }
        self.cursor = index;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
