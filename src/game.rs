use std::fmt;

use log::{debug, info, warn};
use thiserror::Error;

use crate::board::{Board, Color, Piece, Role, Square};
use crate::feedback::FeedbackSource;
use crate::notation::move_notation;
use crate::rules::{self, Status};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Active,
    Checkmate { winner: Color },
    Stalemate,
    Resigned { winner: Color },
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Active
    }

    /// Winning side, if the game ended decisively.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Resigned { winner } => Some(winner),
            GameStatus::Active | GameStatus::Stalemate => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate, draw"),
            GameStatus::Resigned { winner } => write!(f, "resigned, {winner} wins"),
        }
    }
}

/// A move as it was played, with what it did to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Always `Some(Role::Queen)` when a pawn reached the last row.
    pub promotion: Option<Role>,
    /// Opponent in check after the move.
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl MoveRecord {
    /// `"e2-e4"`.
    pub fn notation(&self) -> String {
        move_notation(self.from, self.to)
    }
}

/// Why a move or action was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is over ({0})")]
    GameOver(GameStatus),
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("it is {0}'s turn")]
    NotYourTurn(Color),
    #[error("illegal move {from}-{to}")]
    IllegalMove { from: Square, to: Square },
}

/// A game between two sides: position, turn order, outcome and history.
///
/// Check, checkmate and stalemate are recomputed from the board whenever
/// they are asked for. En passant is never offered: no target is tracked.
#[derive(Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
    history: Vec<MoveRecord>,

    /// Square picked by the last click, if it held a piece of the side to move.
    selected: Option<Square>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starting position, White to move.
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Continues from an arbitrary position. The status is derived from it.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let status = match rules::classify(&board, turn) {
            Status::Checkmate => GameStatus::Checkmate { winner: !turn },
            Status::Stalemate => GameStatus::Stalemate,
            Status::Ongoing => GameStatus::Active,
        };
        Self {
            board,
            turn,
            status,
            history: Vec::new(),
            selected: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn is_check(&self) -> bool {
        rules::is_in_check(&self.board, self.turn)
    }

    pub fn is_checkmate(&self) -> bool {
        rules::is_checkmate(&self.board, self.turn)
    }

    pub fn is_stalemate(&self) -> bool {
        rules::is_stalemate(&self.board, self.turn)
    }

    /// Safe destinations of the piece on `from`, empty unless it belongs to the side to move.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if !self.board.is_color_at(from, self.turn) {
            return Vec::new();
        }
        rules::safe_moves(&self.board, from, None)
    }

    /// Submits a move for the side to move.
    ///
    /// The move is checked against the piece's generated moves only. A move
    /// that leaves the mover's own king attacked is accepted here; the
    /// selection flow in [`Game::click`] never offers one.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        self.check_playable(from, to)
            .map(|piece| self.apply(from, to, piece))
            .inspect_err(|err| warn!("rejected move {}: {err}", move_notation(from, to)))
    }

    /// Handles a click on `square`.
    ///
    /// - With a piece selected, clicking one of its safe destinations plays the move.
    /// - Clicking a piece of the side to move selects it.
    /// - Anything else clears the selection.
    pub fn click(&mut self, square: Square) -> Result<Option<MoveRecord>, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver(self.status));
        }

        if let Some(from) = self.selected
            && self.legal_destinations(from).contains(&square)
        {
            self.selected = None;
            return self.play(from, square).map(Some);
        }

        self.selected = self
            .board
            .is_color_at(square, self.turn)
            .then_some(square);
        Ok(None)
    }

    /// `side` gives up; the opponent wins.
    pub fn resign(&mut self, side: Color) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver(self.status));
        }
        self.status = GameStatus::Resigned { winner: !side };
        self.selected = None;
        info!("{side} resigned");
        Ok(())
    }

    fn check_playable(&self, from: Square, to: Square) -> Result<Piece, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver(self.status));
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn(self.turn));
        }
        if !rules::is_valid_move(&self.board, from, to, None) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(piece)
    }

    /// Plays an already validated move and updates turn and status.
    fn apply(&mut self, from: Square, to: Square, piece: Piece) -> MoveRecord {
        let captured = self.board.relocate(from, to);

        // Promotion is always to a queen.
        let promotion = (piece.role == Role::Pawn && to.row() == piece.color.promotion_row())
            .then(|| {
                self.board.put(
                    to,
                    Piece {
                        role: Role::Queen,
                        ..piece
                    },
                );
                Role::Queen
            });

        self.turn = !self.turn;
        self.selected = None;

        let is_check = rules::is_in_check(&self.board, self.turn);
        let is_checkmate = rules::is_checkmate(&self.board, self.turn);
        let is_stalemate = rules::is_stalemate(&self.board, self.turn);

        if is_checkmate {
            self.status = GameStatus::Checkmate { winner: piece.color };
        } else if is_stalemate {
            self.status = GameStatus::Stalemate;
        }

        let record = MoveRecord {
            from,
            to,
            piece,
            captured,
            promotion,
            is_check,
            is_checkmate,
        };
        debug!(
            "{} {} {}{}",
            piece.color,
            piece.role,
            record.notation(),
            if is_check { "+" } else { "" }
        );
        if self.status.is_over() {
            info!("game over: {}", self.status);
        }

        self.history.push(record);
        record
    }
}

impl FeedbackSource for Game {
    fn board(&self) -> &Board {
        &self.board
    }

    fn turn(&self) -> Color {
        self.turn
    }

    fn selected(&self) -> Option<Square> {
        self.selected
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("position", &self.board.to_fen_placement())
            .field("turn", &self.turn)
            .field("status", &self.status)
            .field("moves", &self.history.len())
            .field("selected", &self.selected)
            .finish()
    }
}
