//! History-tracking state machine for tic-tac-toe.
//!
//! The authoritative state is the full sequence of board snapshots plus a
//! cursor into that sequence. Whose turn it is and whether the game is over
//! are always recomputed from the cursor and the board it points at; nothing
//! derived is stored, so nothing derived can desync.

use crate::position::Position;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// Reason a move was not applied.
///
/// Rejections are silent no-ops by contract; this exists only for
/// structured debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Rejection {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already won.
    #[display("game is already won")]
    GameOver,
}

/// Tic-tac-toe game with navigable move history.
///
/// Every move appends a fresh board snapshot; [`Game::jump_to`] moves the
/// cursor across recorded snapshots without touching them. Making a move
/// while rewound discards the abandoned forward branch first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Board snapshots, oldest first. Entry 0 is always the empty board.
    pub(crate) history: Vec<Board>,
    /// Cursor into `history`.
    pub(crate) current_step: usize,
}

impl Game {
    /// Creates a new game: the empty board at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// Returns the board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Returns all recorded board snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the cursor into history.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the player whose turn it is at the cursor.
    ///
    /// Derived from cursor parity: X on even steps, O on odd. Holds across
    /// jumps, since a jump only moves the cursor.
    pub fn to_move(&self) -> Player {
        if self.current_step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the status at the cursor, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        match rules::check_winner(self.current_board()) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress(self.to_move()),
        }
    }

    fn rejection(&self, pos: Position) -> Option<Rejection> {
        let board = self.current_board();
        if rules::check_winner(board).is_some() {
            return Some(Rejection::GameOver);
        }
        if !board.is_empty(pos) {
            return Some(Rejection::SquareOccupied(pos));
        }
        None
    }

    /// Places the mark of the player to move at `pos`.
    ///
    /// Moves onto an occupied square or after a win are silent no-ops.
    /// A legal move truncates any forward history left over from a rewind,
    /// appends the successor board, and parks the cursor on it.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Some(reason) = self.rejection(pos) {
            debug!(%reason, "move rejected");
            return;
        }

        // Branching rule: a move made while rewound abandons the redo branch.
        self.history.truncate(self.current_step + 1);

        let next = self.current_board().with(pos, self.to_move());
        self.history.push(next);
        self.current_step = self.history.len() - 1;
    }

    /// Moves the cursor to a previously recorded step.
    ///
    /// A pure cursor move: history is never modified. Out-of-range steps
    /// are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            debug!(step, len = self.history.len(), "jump target out of range");
            return;
        }
        self.current_step = step;
    }

    /// Returns a read-only projection for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_at_empty_board() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert_eq!(*game.current_board(), Board::new());
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_cursor_tracks_tail_after_move() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        assert_eq!(game.current_step(), game.history().len() - 1);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_turn_parity_after_jump() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        game.apply_move(Position::TopLeft);
        game.apply_move(Position::TopRight);

        game.jump_to(2);
        assert_eq!(game.to_move(), Player::X);
        game.jump_to(1);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        game.jump_to(7);
        assert_eq!(game.current_step(), 1);
    }
}
