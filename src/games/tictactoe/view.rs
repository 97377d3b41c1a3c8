//! Read-only view of a game for front ends.
//!
//! A [`GameView`] holds exactly what a front end shows: the status line, the
//! text of each cell, and one history control per recorded position. It is
//! rebuilt from [`GameState`] after every action.

use super::game::GameState;
use super::position::Position;
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One "jump to" control in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History index this control selects.
    index: usize,
    /// Control label.
    label: String,
    /// Whether this is the selected position.
    current: bool,
}

impl MoveEntry {
    /// Builds the entry for history `index`.
    pub fn new(index: usize, current: bool) -> Self {
        let label = if index > 0 {
            format!("Go to move #{}", index)
        } else {
            "Go to game start".to_string()
        };
        Self {
            index,
            label,
            current,
        }
    }
}

/// Snapshot of everything a front end renders.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// `Winner: X` or `Next player: O`.
    status: String,
    /// Cell text in row-major order; empty cells are `""`.
    squares: [String; 9],
    /// One entry per history index.
    moves: Vec<MoveEntry>,
    /// Selected history index.
    current_move: usize,
    /// Completed line on the selected board, if any.
    winning_line: Option<[usize; 3]>,
}

impl From<&GameState> for GameView {
    #[instrument(skip(game), fields(cursor = game.current_move()))]
    fn from(game: &GameState) -> Self {
        let board = game.current_board();
        let winning_line = super::rules::winning_line(board);

        let status = match winning_line {
            Some((winner, _)) => format!("Winner: {}", winner),
            None => format!("Next player: {}", game.current_turn()),
        };

        let squares = Position::ALL.map(|pos| board.get(pos).symbol().to_string());

        let moves = (0..game.move_count())
            .map(|index| MoveEntry::new(index, index == game.current_move()))
            .collect();

        Self {
            status,
            squares,
            moves,
            current_move: game.current_move(),
            winning_line: winning_line.map(|(_, line)| line.map(Position::to_index)),
        }
    }
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status)?;
        for (row, cells) in self.squares.chunks(3).enumerate() {
            let line = cells
                .iter()
                .map(|c| if c.is_empty() { " " } else { c.as_str() })
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{}", line)?;
            if row < 2 {
                writeln!(f, "-+-+-")?;
            }
        }
        for entry in &self.moves {
            let marker = if entry.current { '>' } else { ' ' };
            writeln!(f, "{} {}. {}", marker, entry.index + 1, entry.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_new_game() {
        let view = GameView::from(&GameState::new());
        assert_eq!(view.status(), "Next player: X");
        assert!(view.squares().iter().all(String::is_empty));
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].label(), "Go to game start");
        assert_eq!(*view.winning_line(), None);
    }

    #[test]
    fn test_view_labels_follow_history() {
        let mut game = GameState::new();
        game.apply_move(4).unwrap();
        game.apply_move(0).unwrap();
        game.jump_to_move(1).unwrap();

        let view = GameView::from(&game);
        let labels: Vec<_> = view.moves().iter().map(|m| m.label().as_str()).collect();
        assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
        assert_eq!(*view.current_move(), 1);
        assert!(*view.moves()[1].current());
        assert_eq!(view.status(), "Next player: O");
        assert_eq!(view.squares()[4], "X");
        assert_eq!(view.squares()[0], "");
    }

    #[test]
    fn test_view_reports_winner_and_line() {
        let mut game = GameState::new();
        for cell in [2, 0, 4, 1, 6] {
            game.apply_move(cell).unwrap();
        }

        let view = GameView::from(&game);
        assert_eq!(view.status(), "Winner: X");
        assert_eq!(*view.winning_line(), Some([2, 4, 6]));
    }

    #[test]
    fn test_view_display() {
        let mut game = GameState::new();
        game.apply_move(0).unwrap();

        let text = GameView::from(&game).to_string();
        assert_eq!(
            text,
            "Next player: O\nX| | \n-+-+-\n | | \n-+-+-\n | | \n  1. Go to game start\n> 2. Go to move #1\n"
        );
    }
}
