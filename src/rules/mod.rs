//! Chess rules over a [`Board`](crate::board::Board) snapshot.
//!
//! Generation, legality filtering and classification compose in that order.
//! Every function is pure: it borrows the board and returns a fresh value.

pub mod attacks;
pub mod legality;
pub mod movegen;
pub mod status;

pub use attacks::{checkers, is_in_check, king_square};
pub use legality::{is_move_safe, safe_moves};
pub use movegen::{generate_moves, is_valid_move};
pub use status::{Status, classify, is_checkmate, is_stalemate};
