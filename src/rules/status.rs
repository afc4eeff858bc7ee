use crate::board::{Board, Color};

use super::attacks::is_in_check;
use super::legality::is_move_safe;
use super::movegen::generate_moves;

/// Terminal-state classification of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// In check with no safe move for any piece.
pub fn is_checkmate(board: &Board, side: Color) -> bool {
    if !is_in_check(board, side) {
        return false;
    }
    !has_safe_move(board, side)
}

/// Not in check, yet no safe move for any piece.
pub fn is_stalemate(board: &Board, side: Color) -> bool {
    if is_in_check(board, side) {
        return false;
    }
    !has_safe_move(board, side)
}

/// Classifies the position for `side`.
///
/// Each predicate rescans the board from scratch; nothing is shared between them.
pub fn classify(board: &Board, side: Color) -> Status {
    if is_checkmate(board, side) {
        Status::Checkmate
    } else if is_stalemate(board, side) {
        Status::Stalemate
    } else {
        Status::Ongoing
    }
}

fn has_safe_move(board: &Board, side: Color) -> bool {
    board.pieces_of(side).any(|(from, _)| {
        generate_moves(board, from, None)
            .into_iter()
            .any(|to| is_move_safe(board, from, to, side))
    })
}
