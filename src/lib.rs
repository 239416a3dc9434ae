//! Tic-tac-toe game core with navigable move history.
//!
//! The crate keeps every board snapshot a game produces and exposes "time
//! travel" across them: rewind to any recorded step, inspect it, and branch
//! off with a new move (which discards the abandoned forward history).
//!
//! # Architecture
//!
//! - **`rules`**: pure win/draw predicates over a board
//! - **[`Game`]**: the state machine - board history, cursor, move legality
//! - **[`Snapshot`]**: read-only projection consumed by rendering layers
//! - **`invariants`**: first-class, independently testable state properties
//!
//! Turn order and game-over status are always derived (cursor parity and
//! win detection respectively), never cached.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Game, Player, Position};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::Center);
//! game.apply_move(Position::TopLeft);
//!
//! // Rewind one step: it is O's turn again, history is intact.
//! game.jump_to(1);
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.history().len(), 3);
//!
//! // Branching: a new move from here drops the abandoned future.
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use game::Game;
pub use position::Position;
pub use snapshot::Snapshot;
pub use types::{Board, GameStatus, Player, Square};
