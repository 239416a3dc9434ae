//! Cursor bounds invariant: the current step always points into history.

use super::Invariant;
use crate::game::Game;

/// Invariant: `current_step < history.len()`.
///
/// Holds by construction: moves park the cursor on the new tail and jumps
/// bounds-check their target.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step points into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_truncating_move() {
        let mut game = Game::new();
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::Center);
        game.apply_move(Position::TopRight);
        game.jump_to(1);
        game.apply_move(Position::BottomLeft);

        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_cursor_violates() {
        let mut game = Game::new();
        game.current_step = 3;

        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
