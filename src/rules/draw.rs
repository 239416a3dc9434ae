//! Board saturation check for tic-tac-toe.
//!
//! The state machine never consults this: a drawn game is not a distinct
//! status, it simply has no legal moves left. The predicate exists for
//! callers and tests that want to recognize the situation.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
