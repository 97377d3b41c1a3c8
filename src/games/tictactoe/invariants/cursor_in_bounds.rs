//! Cursor invariant: the cursor always selects a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: history is non-empty, starts empty, and the cursor is in range.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        match history.get(0) {
            Some(start) => start.occupied_count() == 0 && history.cursor() < history.len(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "Cursor selects a recorded snapshot and history starts from an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();
        game.history.cursor = 2;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.snapshots.clear();
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
