//! Serializable read projection of a game for rendering layers.

use crate::game::Game;
use crate::types::{Board, GameStatus};
use serde::{Deserialize, Serialize};

/// Everything a rendering layer needs to draw the game.
///
/// A plain value detached from the [`Game`] that produced it: the grid,
/// the status line, and the jump-target list are all derivable from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the cursor.
    pub board: Board,
    /// Status at the cursor.
    pub status: GameStatus,
    /// Every recorded board snapshot, oldest first.
    pub history: Vec<Board>,
    /// Cursor into `history`.
    pub current_step: usize,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: *game.current_board(),
            status: game.status(),
            history: game.history().to_vec(),
            current_step: game.current_step(),
        }
    }
}

impl Snapshot {
    /// Label for the jump target at `step`.
    pub fn move_label(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        }
    }

    /// One jump-target label per history entry, in order.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len()).map(Self::move_label).collect()
    }

    /// Status line for display.
    pub fn status_string(&self) -> String {
        self.status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_move_labels() {
        assert_eq!(Snapshot::move_label(0), "Go to game start");
        assert_eq!(Snapshot::move_label(2), "Go to move #2");
    }

    #[test]
    fn test_one_label_per_history_entry() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);

        let snapshot = game.snapshot();
        let labels = snapshot.move_labels();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0], "Go to game start");
        assert_eq!(labels[2], "Go to move #2");
    }
}
