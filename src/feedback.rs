use crate::board::{Board, Color, Square};
use crate::rules;

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// Safe destination for the selected piece
    Destination,
    /// Safe destination that captures an opponent piece
    Capture,
    /// The selected piece
    Origin,
    /// King of the side to move, currently attacked
    Check,
    /// Opponent piece giving check
    Checker,
}

/// Squares and their highlight for the current position.
///
/// `BoardFeedback` is computed by [`compute_feedback()`] and consumed by the
/// terminal renderer (or any other [`crate::BoardDisplay`]). At most one entry
/// exists per square.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Square, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Square, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any existing entry.
    pub fn set(&mut self, square: Square, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == square) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((square, feedback)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

/// What the feedback computation needs to know about a game.
pub trait FeedbackSource {
    /// Current position
    fn board(&self) -> &Board;

    /// Side to move
    fn turn(&self) -> Color;

    /// Square the player has picked, if any
    fn selected(&self) -> Option<Square>;
}

/// Compute visual feedback for the current position.
///
/// - Side to move in check: king square and checking pieces are marked.
/// - Own piece selected: its square and every safe destination are marked,
///   captures distinguished from quiet moves.
pub fn compute_feedback(source: &impl FeedbackSource) -> BoardFeedback {
    let board = source.board();
    let turn = source.turn();
    let mut feedback = BoardFeedback::new();

    if rules::is_in_check(board, turn) {
        show_check(board, turn, &mut feedback);
    }

    if let Some(from) = source.selected()
        && board.is_color_at(from, turn)
    {
        show_destinations_for(board, from, turn, &mut feedback);
    }

    feedback
}

fn show_check(board: &Board, turn: Color, feedback: &mut BoardFeedback) {
    if let Some(king) = rules::king_square(board, turn) {
        feedback.set(king, SquareFeedback::Check);
    }
    for checker in rules::checkers(board, turn) {
        feedback.set(checker, SquareFeedback::Checker);
    }
}

fn show_destinations_for(board: &Board, from: Square, turn: Color, feedback: &mut BoardFeedback) {
    feedback.set(from, SquareFeedback::Origin);
    for to in rules::safe_moves(board, from, None) {
        let kind = if board.is_color_at(to, !turn) {
            SquareFeedback::Capture
        } else {
            SquareFeedback::Destination
        };
        feedback.set(to, kind);
    }
}
