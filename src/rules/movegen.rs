//! Pseudo-legal move generation.
//!
//! Destinations respect piece movement and occupancy but may leave the
//! mover's own king attacked. See [`super::legality`] for the filter.

use crate::board::{Board, Color, Role, Square};

const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Destinations for the piece on `from`. Empty if `from` is empty.
///
/// `en_passant` is the square a pawn skipped on the previous move, if any.
/// It is trusted as given: a pawn may capture onto it even when nothing
/// stands beside the mover.
pub fn generate_moves(board: &Board, from: Square, en_passant: Option<Square>) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.role {
        Role::Pawn => pawn_moves(board, from, piece.color, en_passant),
        Role::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS),
        Role::Bishop => sliding_moves(board, from, piece.color, &BISHOP_DIRS),
        Role::Rook => sliding_moves(board, from, piece.color, &ROOK_DIRS),
        Role::Queen => {
            let mut moves = sliding_moves(board, from, piece.color, &ROOK_DIRS);
            moves.extend(sliding_moves(board, from, piece.color, &BISHOP_DIRS));
            moves
        }
        Role::King => step_moves(board, from, piece.color, &KING_OFFSETS),
    }
}

/// True if `to` is among the generated destinations of the piece on `from`.
///
/// Does not check whether the move leaves the mover's king attacked; use
/// [`super::legality::is_move_safe`] for that.
pub fn is_valid_move(board: &Board, from: Square, to: Square, en_passant: Option<Square>) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if board.is_color_at(to, piece.color) {
        return false;
    }
    generate_moves(board, from, en_passant).contains(&to)
}

fn pawn_moves(
    board: &Board,
    from: Square,
    color: Color,
    en_passant: Option<Square>,
) -> Vec<Square> {
    let mut moves = Vec::with_capacity(4);
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0)
        && board.piece_at(one).is_none()
    {
        moves.push(one);

        if from.row() == color.pawn_row()
            && let Some(two) = one.offset(forward, 0)
            && board.piece_at(two).is_none()
        {
            moves.push(two);
        }
    }

    for side in [-1, 1] {
        let Some(target) = from.offset(forward, side) else {
            continue;
        };
        if board.is_color_at(target, !color) || en_passant == Some(target) {
            moves.push(target);
        }
    }

    moves
}

/// Knight and king: fixed offsets, no blocking.
fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&to| !board.is_color_at(to, color))
        .collect()
}

/// Rays stop at the first occupied square, which is kept only if it holds an enemy.
fn sliding_moves(board: &Board, from: Square, color: Color, dirs: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::with_capacity(14);

    for &(d_row, d_col) in dirs {
        let mut cur = from.offset(d_row, d_col);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => moves.push(to),
                Some(blocker) => {
                    if blocker.color != color {
                        moves.push(to);
                    }
                    break;
                }
            }
            cur = to.offset(d_row, d_col);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use test_case::test_case;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square is invalid")
    }

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    fn squares(names: &[&str]) -> Vec<Square> {
        sorted(names.iter().map(|n| sq(n)).collect())
    }

    fn lone(role: Role, at: &str) -> Board {
        Board::empty().with(sq(at), Piece::new(role, Color::White))
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        assert!(generate_moves(&Board::starting(), sq("e4"), None).is_empty());
    }

    #[test_case("a1", 2; "corner")]
    #[test_case("h8", 2; "far corner")]
    #[test_case("b1", 3; "edge next to corner")]
    #[test_case("a4", 4; "edge middle")]
    #[test_case("b2", 4; "inner corner")]
    #[test_case("b4", 6; "one from edge")]
    #[test_case("d4", 8; "center")]
    #[test_case("e5", 8; "center two")]
    fn test_knight_destination_count(at: &str, expected: usize) {
        let board = lone(Role::Knight, at);
        assert_eq!(generate_moves(&board, sq(at), None).len(), expected);
    }

    #[test]
    fn test_starting_position_pawn_and_knight_moves() {
        let board = Board::starting();
        assert_eq!(
            sorted(generate_moves(&board, sq("e2"), None)),
            squares(&["e3", "e4"])
        );
        assert_eq!(
            sorted(generate_moves(&board, sq("g1"), None)),
            squares(&["f3", "h3"])
        );
        assert_eq!(
            sorted(generate_moves(&board, sq("b8"), None)),
            squares(&["a6", "c6"])
        );
        assert!(generate_moves(&board, sq("a1"), None).is_empty());
        assert!(generate_moves(&board, sq("d1"), None).is_empty());
        assert!(generate_moves(&board, sq("e1"), None).is_empty());
    }

    #[test]
    fn test_pawn_blocked_forward() {
        let board = Board::empty()
            .with(sq("e2"), Piece::new(Role::Pawn, Color::White))
            .with(sq("e3"), Piece::new(Role::Knight, Color::Black));
        assert!(generate_moves(&board, sq("e2"), None).is_empty());
    }

    #[test]
    fn test_pawn_double_step_needs_both_squares_empty() {
        let board = Board::empty()
            .with(sq("e2"), Piece::new(Role::Pawn, Color::White))
            .with(sq("e4"), Piece::new(Role::Knight, Color::Black));
        assert_eq!(generate_moves(&board, sq("e2"), None), squares(&["e3"]));
    }

    #[test]
    fn test_pawn_no_double_step_off_start_row() {
        let board = Board::empty().with(sq("e3"), Piece::new(Role::Pawn, Color::White));
        assert_eq!(generate_moves(&board, sq("e3"), None), squares(&["e4"]));
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let board = Board::empty()
            .with(sq("d7"), Piece::new(Role::Pawn, Color::Black))
            .with(sq("c6"), Piece::new(Role::Bishop, Color::White))
            .with(sq("e6"), Piece::new(Role::Bishop, Color::Black));
        assert_eq!(
            sorted(generate_moves(&board, sq("d7"), None)),
            squares(&["c6", "d5", "d6"])
        );
    }

    #[test]
    fn test_pawn_captures_only_enemies() {
        let board = Board::empty()
            .with(sq("e4"), Piece::new(Role::Pawn, Color::White))
            .with(sq("d5"), Piece::new(Role::Pawn, Color::Black))
            .with(sq("f5"), Piece::new(Role::Pawn, Color::White));
        assert_eq!(
            sorted(generate_moves(&board, sq("e4"), None)),
            squares(&["d5", "e5"])
        );
    }

    #[test]
    fn test_pawn_on_edge_file_has_one_diagonal() {
        let board = Board::empty()
            .with(sq("a4"), Piece::new(Role::Pawn, Color::White))
            .with(sq("b5"), Piece::new(Role::Pawn, Color::Black));
        assert_eq!(
            sorted(generate_moves(&board, sq("a4"), None)),
            squares(&["a5", "b5"])
        );
    }

    #[test]
    fn test_pawn_en_passant_target_is_trusted() {
        // No black pawn on d5: the target alone makes d6 reachable.
        let board = Board::empty().with(sq("e5"), Piece::new(Role::Pawn, Color::White));
        assert_eq!(
            sorted(generate_moves(&board, sq("e5"), Some(sq("d6")))),
            squares(&["d6", "e6"])
        );
        assert_eq!(generate_moves(&board, sq("e5"), None), squares(&["e6"]));
        // A target that is not a forward diagonal is ignored.
        assert_eq!(
            generate_moves(&board, sq("e5"), Some(sq("d4"))),
            squares(&["e6"])
        );
    }

    #[test]
    fn test_pawn_on_last_row_has_no_moves() {
        let board = Board::empty().with(sq("e8"), Piece::new(Role::Pawn, Color::White));
        assert!(generate_moves(&board, sq("e8"), None).is_empty());
    }

    #[test]
    fn test_rook_rays_stop_at_blockers() {
        let board = Board::empty()
            .with(sq("d4"), Piece::new(Role::Rook, Color::White))
            .with(sq("d6"), Piece::new(Role::Pawn, Color::Black))
            .with(sq("f4"), Piece::new(Role::Pawn, Color::White));
        assert_eq!(
            sorted(generate_moves(&board, sq("d4"), None)),
            squares(&[
                "d5", "d6", // up, capture
                "e4", // right, stops before own pawn
                "d3", "d2", "d1", // down
                "c4", "b4", "a4", // left
            ])
        );
    }

    #[test]
    fn test_bishop_rays_stop_at_blockers() {
        let board = Board::empty()
            .with(sq("c1"), Piece::new(Role::Bishop, Color::White))
            .with(sq("e3"), Piece::new(Role::Knight, Color::Black))
            .with(sq("b2"), Piece::new(Role::Pawn, Color::White));
        assert_eq!(
            sorted(generate_moves(&board, sq("c1"), None)),
            squares(&["d2", "e3"])
        );
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let board = Board::from_fen("8/8/2p5/8/2Q2P2/8/8/8").unwrap();
        let queen = sorted(generate_moves(&board, sq("c4"), None));

        let as_rook = board.with(sq("c4"), Piece::new(Role::Rook, Color::White));
        let as_bishop = board.with(sq("c4"), Piece::new(Role::Bishop, Color::White));
        let mut union = generate_moves(&as_rook, sq("c4"), None);
        union.extend(generate_moves(&as_bishop, sq("c4"), None));

        assert_eq!(queen, sorted(union));
        assert!(queen.contains(&sq("c6")));
        assert!(!queen.contains(&sq("c7")));
        assert!(!queen.contains(&sq("f4")));
    }

    #[test]
    fn test_lone_queen_in_center_reaches_27_squares() {
        let board = lone(Role::Queen, "d4");
        assert_eq!(generate_moves(&board, sq("d4"), None).len(), 27);
    }

    #[test]
    fn test_king_has_no_castling_and_no_safety_filter() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3r4/R3K2R").unwrap();
        let king = sorted(generate_moves(&board, sq("e1"), None));
        // d2 capture, d1 and f1 and f2 and e2 steps; no c1/g1.
        assert_eq!(king, squares(&["d1", "d2", "e2", "f1", "f2"]));
    }

    #[test]
    fn test_generated_moves_never_hit_own_pieces() {
        let board = Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R")
            .unwrap();
        for (from, piece) in board.pieces() {
            for to in generate_moves(&board, from, None) {
                assert!(
                    !board.is_color_at(to, piece.color),
                    "{from} -> {to} lands on own piece"
                );
            }
        }
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::starting();
        assert!(is_valid_move(&board, sq("e2"), sq("e4"), None));
        assert!(is_valid_move(&board, sq("g8"), sq("f6"), None));
        assert!(!is_valid_move(&board, sq("e2"), sq("e5"), None));
        assert!(!is_valid_move(&board, sq("e4"), sq("e5"), None));
        assert!(!is_valid_move(&board, sq("d1"), sq("d2"), None));
    }

    #[test]
    fn test_is_valid_move_en_passant() {
        // After ...d7-d5 the target is d6.
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3").expect("valid FEN");
        assert!(is_valid_move(&board, sq("e5"), sq("d6"), Some(sq("d6"))));
        assert!(!is_valid_move(&board, sq("e5"), sq("d6"), None));
        assert!(!is_valid_move(&board, sq("e5"), sq("f6"), Some(sq("d6"))));
        // Only pawns use the target.
        assert!(!is_valid_move(&board, sq("e1"), sq("d6"), Some(sq("d6"))));
    }
}
