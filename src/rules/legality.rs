use crate::board::{Board, Color, Square};

use super::attacks::is_in_check;
use super::movegen::generate_moves;

/// True iff moving the piece on `from` to `to` leaves `moving_side`'s king unattacked.
///
/// The move is played as a plain relocation on a copy of the board: no
/// en-passant removal and no castling rook move.
pub fn is_move_safe(board: &Board, from: Square, to: Square, moving_side: Color) -> bool {
    let mut after = *board;
    after.relocate(from, to);
    !is_in_check(&after, moving_side)
}

/// Generated destinations of the piece on `from` that pass [`is_move_safe`]
/// for that piece's side.
pub fn safe_moves(board: &Board, from: Square, en_passant: Option<Square>) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    generate_moves(board, from, en_passant)
        .into_iter()
        .filter(|&to| is_move_safe(board, from, to, piece.color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::movegen::is_valid_move;

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("invalid test FEN")
    }

    fn sq(name: &str) -> Square {
        name.parse().expect("test square is invalid")
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        // Bishop e2 pinned against e1 by the rook on e8.
        let position = board("4r1k1/8/8/8/8/8/4B3/4K3");
        assert!(!is_move_safe(&position, sq("e2"), sq("d3"), Color::White));
        assert!(safe_moves(&position, sq("e2"), None).is_empty());
        assert!(!generate_moves(&position, sq("e2"), None).is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let position = board("3r2k1/8/8/8/8/8/8/4K3");
        let mut moves = safe_moves(&position, sq("e1"), None);
        moves.sort();
        let mut expected = vec![sq("e2"), sq("f1"), sq("f2")];
        expected.sort();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_capturing_the_checker_is_safe() {
        let position = board("6k1/8/8/8/8/8/5q2/4K3");
        assert!(is_move_safe(&position, sq("e1"), sq("f2"), Color::White));
    }

    #[test]
    fn test_does_not_mutate_input() {
        let position = Board::starting();
        let before = position;
        is_move_safe(&position, sq("e2"), sq("e4"), Color::White);
        assert_eq!(position, before);
    }

    #[test]
    fn test_valid_move_may_still_be_unsafe() {
        // is_valid_move accepts a pinned piece's move; only the safety filter rejects it.
        let position = board("4r1k1/8/8/8/8/8/4B3/4K3");
        assert!(is_valid_move(&position, sq("e2"), sq("d3"), None));
        assert!(!is_move_safe(&position, sq("e2"), sq("d3"), Color::White));
    }

    #[test]
    fn test_safe_moves_of_empty_square() {
        assert!(safe_moves(&Board::starting(), sq("e4"), None).is_empty());
    }

    #[test]
    fn test_kingless_side_has_all_moves_safe() {
        let position = board("8/8/8/3R4/8/8/8/8");
        assert_eq!(
            safe_moves(&position, sq("d5"), None).len(),
            generate_moves(&position, sq("d5"), None).len()
        );
    }
}
