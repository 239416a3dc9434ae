//! Empty origin invariant: history always starts at the empty board.

use super::Invariant;
use crate::game::Game;
use crate::types::Board;

/// Invariant: history entry 0 is the all-empty board.
///
/// Every game grows from the same origin; truncation on branching keeps at
/// least the current step, so the origin can never be discarded.
pub struct EmptyOriginInvariant;

impl Invariant<Game> for EmptyOriginInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .first()
            .is_some_and(|board| *board == Board::new())
    }

    fn description() -> &'static str {
        "History entry 0 is the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(EmptyOriginInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.jump_to(0);
        game.apply_move(Position::BottomRight);

        assert!(EmptyOriginInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_origin_violates() {
        let mut game = Game::new();
        game.history[0] = Board::new().with(Position::Center, Player::O);

        assert!(!EmptyOriginInvariant::holds(&game));
    }
}
