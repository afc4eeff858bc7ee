//! Chess rules engine: move generation, check detection, legality filtering
//! and checkmate/stalemate classification over an 8×8 board snapshot, plus
//! the game flow and terminal front end built on top of it.

pub mod board;
pub mod feedback;
pub mod game;
pub mod notation;
pub mod rules;
pub mod terminal;

pub use board::{Board, BoardError, Color, Move, Piece, Role, Square};
pub use game::{Game, GameStatus, MoveError, MoveRecord};
pub use notation::{NotationError, notation_to_square, square_to_notation};
pub use rules::{
    Status, generate_moves, is_checkmate, is_in_check, is_move_safe, is_stalemate, is_valid_move,
};

/// Trait for displaying a position and its feedback to the player.
///
/// Abstracts over the terminal renderer and any other front end,
/// providing a uniform interface for the output side of the game loop.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board with the given feedback highlighted.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants
    /// to their own output (terminal colors, etc.).
    fn show(&mut self, board: &Board, feedback: &feedback::BoardFeedback)
    -> Result<(), Self::Error>;
}
