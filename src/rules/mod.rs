//! Pure rules predicates for tic-tac-toe boards.
//!
//! These functions are total and side-effect free; the game state machine
//! consults [`check_winner`] to decide move legality and terminal status.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;
