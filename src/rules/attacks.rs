use crate::board::{Board, Color, Role, Square};

use super::movegen::generate_moves;

/// Square of `side`'s king, scanning row by row. `None` if there is no king.
pub fn king_square(board: &Board, side: Color) -> Option<Square> {
    board
        .pieces_of(side)
        .find(|(_, piece)| piece.role == Role::King)
        .map(|(square, _)| square)
}

/// True iff some opposing piece's generated moves include `side`'s king square.
///
/// A board without a king for `side` is never in check. Opposing pawns are
/// generated without an en-passant target: a king cannot be taken en passant.
pub fn is_in_check(board: &Board, side: Color) -> bool {
    let Some(king) = king_square(board, side) else {
        return false;
    };

    board
        .pieces_of(!side)
        .any(|(from, _)| generate_moves(board, from, None).contains(&king))
}

/// Every opposing square that attacks `side`'s king.
pub fn checkers(board: &Board, side: Color) -> Vec<Square> {
    let Some(king) = king_square(board, side) else {
        return Vec::new();
    };

    board
        .pieces_of(!side)
        .filter(|&(from, _)| generate_moves(board, from, None).contains(&king))
        .map(|(from, _)| from)
        .collect()
}
