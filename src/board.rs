use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// The two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Row step of a pawn advance: White moves toward row 0, Black toward row 7.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the side's pawns start on (and may double-step from).
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row for the side's pawns.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    /// Lowercase FEN letter.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(Role::Pawn),
            'n' => Some(Role::Knight),
            'b' => Some(Role::Bishop),
            'r' => Some(Role::Rook),
            'q' => Some(Role::Queen),
            'k' => Some(Role::King),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Pawn => "pawn",
            Role::Knight => "knight",
            Role::Bishop => "bishop",
            Role::Rook => "rook",
            Role::Queen => "queen",
            Role::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece on the board.
///
/// `has_moved` is carried along for a future castling implementation;
/// no rule in this crate reads or writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(role: Role, color: Color) -> Self {
        Self {
            role,
            color,
            has_moved: false,
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub const fn char(self) -> char {
        let ch = self.role.char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        let role = Role::from_char(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(role, color))
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Self {
        let role = match piece.role {
            shakmaty::Role::Pawn => Role::Pawn,
            shakmaty::Role::Knight => Role::Knight,
            shakmaty::Role::Bishop => Role::Bishop,
            shakmaty::Role::Rook => Role::Rook,
            shakmaty::Role::Queen => Role::Queen,
            shakmaty::Role::King => Role::King,
        };
        let color = match piece.color {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        };
        Self::new(role, color)
    }
}

/// A square as a (row, column) pair.
///
/// Row 0 is rank 8 (Black's back rank), row 7 is rank 1. Column 0 is the a-file.
/// Both coordinates are always within `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square if both coordinates are on the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `d_row` rows and `d_col` columns away, if still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = u8::try_from((self.row as i8).checked_add(d_row)?).ok()?;
        let col = u8::try_from((self.col as i8).checked_add(d_col)?).ok()?;
        Self::new(row, col)
    }

    /// All 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    fn to_shakmaty(self) -> shakmaty::Square {
        shakmaty::Square::from_coords(
            shakmaty::File::new(u32::from(self.col)),
            shakmaty::Rank::new(u32::from(BOARD_SIZE - 1 - self.row)),
        )
    }
}

/// A from/to pair. Captures, promotion and turn order are the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Error when importing a board.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("empty FEN string")]
    Empty,
    #[error("invalid piece placement: {0}")]
    Placement(#[from] shakmaty::fen::ParseFenError),
}

type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// An 8×8 grid of optional pieces, indexed `[row][col]`.
///
/// `Board` is `Copy`: rule functions borrow it and any hypothetical
/// position is built on a copy, never on the caller's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: Grid,
}

impl Board {
    /// A board with no pieces.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard opening array.
    pub fn starting() -> Self {
        const BACK_RANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        let mut board = Self::empty();
        for (col, role) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(role, Color::Black));
            board.squares[1][col] = Some(Piece::new(Role::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(Role::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(role, Color::White));
        }
        board
    }

    /// Reads the piece placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is looked at. Material is not
    /// validated: king-less or otherwise unusual positions are accepted.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let placement = fen.split_whitespace().next().ok_or(BoardError::Empty)?;
        let parsed: shakmaty::Board = placement.parse()?;

        let mut board = Self::empty();
        for square in Square::all() {
            if let Some(piece) = parsed.piece_at(square.to_shakmaty()) {
                board.put(square, Piece::from(piece));
            }
        }
        Ok(board)
    }

    /// Writes the piece placement field of a FEN string.
    pub fn to_fen_placement(&self) -> String {
        let mut fen = String::with_capacity(64);
        for (row, cells) in self.squares.iter().enumerate() {
            let mut empty = 0;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row + 1 < self.squares.len() {
                fen.push('/');
            }
        }
        fen
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    /// True if `square` holds a piece of `color`.
    #[inline]
    pub fn is_color_at(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }

    #[inline]
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.row as usize][square.col as usize] = Some(piece);
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// Builder-style `put`, handy for setting up positions.
    #[must_use]
    pub fn with(mut self, square: Square, piece: Piece) -> Self {
        self.put(square, piece);
        self
    }

    /// Moves whatever stands on `from` to `to`, overwriting `to`.
    ///
    /// No capture bookkeeping, en-passant removal or rook relocation.
    /// Returns the piece that was overwritten on `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove(from);
        let replaced = self.remove(to);
        if let Some(piece) = moving {
            self.put(to, piece);
        }
        replaced
    }

    /// All occupied squares, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// The raw grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.squares
    }
}

impl From<Grid> for Board {
    fn from(squares: Grid) -> Self {
        Self { squares }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

/// ASCII diagram, rank 8 on top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE as usize - row)?;
            for cell in cells {
                let ch = cell.map_or('.', Piece::char);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
