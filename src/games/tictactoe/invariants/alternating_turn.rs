//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark added by move `i` belongs to the player whose turn
/// it was at index `i - 1`.
///
/// X moves from even indices, so every snapshot holds as many X marks as
/// O marks, or one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let expected = Square::Occupied(Player::to_move_at(index));
                pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after)
                    .all(|(_, after)| *after == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        for cell in [0, 4, 2, 6, 8] {
            game.apply_move(cell).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_turn(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();

        // X plays again where O should have moved.
        let next = game.current_board().with_mark(Position::Center, Player::X);
        game.history.record(next);

        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
