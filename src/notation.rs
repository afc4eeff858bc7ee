//! Algebraic square names ("e4") for board coordinates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::{BOARD_SIZE, Move, Square};

/// Error when parsing a square name.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("square must be 2 characters (e.g. 'e4')")]
    WrongLength,
    #[error("file must be a-h, got '{0}'")]
    BadFile(char),
    #[error("rank must be 1-8, got '{0}'")]
    BadRank(char),
}

/// File letter from the column, rank digit as `8 - row`.
pub fn square_to_notation(square: Square) -> String {
    let file = (b'a' + square.col()) as char;
    let rank = BOARD_SIZE - square.row();
    format!("{file}{rank}")
}

/// Inverse of [`square_to_notation`]. Uppercase files are accepted.
pub fn notation_to_square(notation: &str) -> Result<Square, NotationError> {
    let mut chars = notation.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::WrongLength);
    };

    let col = match file.to_ascii_lowercase() {
        f @ 'a'..='h' => f as u8 - b'a',
        _ => return Err(NotationError::BadFile(file)),
    };
    // Rank '0' maps to row 8, which `Square::new` rejects.
    rank.to_digit(10)
        .and_then(|r| BOARD_SIZE.checked_sub(r as u8))
        .and_then(|row| Square::new(row, col))
        .ok_or(NotationError::BadRank(rank))
}

/// Move log form used for the history, e.g. `"e2-e4"`.
pub fn move_notation(from: Square, to: Square) -> String {
    format!("{from}-{to}")
}

/// Parses `"e2e4"` or `"e2-e4"` into a [`Move`].
pub fn parse_move(text: &str) -> Result<Move, NotationError> {
    let text = text.trim();
    let (from, to) = match text.len() {
        4 => text.split_at_checked(2),
        5 => text.split_once('-'),
        _ => None,
    }
    .ok_or(NotationError::WrongLength)?;
    Ok(Move::new(notation_to_square(from)?, notation_to_square(to)?))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_notation(*self))
    }
}

/// Parse algebraic notation like "e4" into a Square.
///
/// # Examples
/// ```
/// # use chess_rules::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!((square.row(), square.col()), (4, 4));
/// ```
impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        notation_to_square(s)
    }
}
