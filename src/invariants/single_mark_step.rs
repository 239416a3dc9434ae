//! Single-mark step invariant: each history step adds exactly one mark.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::{Player, Square};

/// Invariant: consecutive history entries differ in exactly one square,
/// which goes from empty to the mark of the player whose turn it was.
///
/// This covers both board immutability (no square is ever rewritten or
/// cleared between steps) and turn alternation (step parity decides the
/// mark: X on even source steps, O on odd).
pub struct SingleMarkStepInvariant;

impl Invariant<Game> for SingleMarkStepInvariant {
    fn holds(game: &Game) -> bool {
        for (step, pair) in game.history().windows(2).enumerate() {
            let (before, after) = (&pair[0], &pair[1]);
            let expected = if step % 2 == 0 { Player::X } else { Player::O };

            let mut changed = 0;
            for pos in Position::ALL {
                match (before.get(pos), after.get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(player)) if player == expected => {
                        changed += 1;
                    }
                    _ => return false,
                }
            }
            if changed != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark of the expected player"
    }
}
