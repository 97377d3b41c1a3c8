//! Snapshot delta invariant: each move fills exactly one empty square.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one cell, which goes
/// from empty to occupied.
///
/// Past squares are never overwritten or cleared.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().snapshots().windows(2).all(|pair| {
            let changed: Vec<_> = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .filter(|(before, after)| before != after)
                .collect();

            matches!(
                changed.as_slice(),
                [(Square::Empty, Square::Occupied(_))]
            )
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for cell in [0, 4, 1, 3, 2] {
            game.apply_move(cell).unwrap();
        }
        assert!(SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        game.apply_move(0).unwrap();

        let mut overwritten = game.history.snapshots[2].clone();
        overwritten.set(Position::Center, Square::Occupied(Player::O));
        game.history.snapshots[2] = overwritten;

        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_snapshot_violates() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        let repeated = game.history.snapshots[1].clone();
        game.history.snapshots.push(repeated);
        assert!(!SingleCellDeltaInvariant::holds(&game));
    }
}
