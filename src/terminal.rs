use std::io::{self, Write};

use crate::BoardDisplay;
use crate::board::{BOARD_SIZE, Board, Color, Square};
use crate::feedback::{BoardFeedback, SquareFeedback, compute_feedback};
use crate::game::Game;
use crate::notation::parse_move;

/// Terminal-based board display.
///
/// Renders the position as an 8×8 grid with ANSI color-coded
/// squares matching the feedback type (destinations, captures, etc.).
/// A flipped display draws the board from Black's side.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    flipped: bool,
}

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new(flipped: bool) -> Self {
        Self { flipped }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, feedback, self.flipped)
    }
}

/// Render board and feedback to any writer. Extracted for testability.
fn render_board(
    w: &mut impl Write,
    board: &Board,
    feedback: &BoardFeedback,
    flipped: bool,
) -> Result<(), DisplayError> {
    let orient = |i: u8| if flipped { BOARD_SIZE - 1 - i } else { i };
    for row in (0..BOARD_SIZE).map(orient) {
        write!(w, " {} ", BOARD_SIZE - row)?;
        for col in (0..BOARD_SIZE).map(orient) {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let symbol = board.piece_at(square).map_or('·', |p| p.char());
            match background(feedback.get(square)) {
                Some(color) => write!(w, "{color} {symbol} \x1b[0m")?,
                None => write!(w, " {symbol} ")?,
            }
        }
        writeln!(w)?;
    }
    if flipped {
        writeln!(w, "    h  g  f  e  d  c  b  a")?;
    } else {
        writeln!(w, "    a  b  c  d  e  f  g  h")?;
    }
    w.flush()?;
    Ok(())
}

/// Map a feedback variant to an ANSI background color.
fn background(feedback: Option<SquareFeedback>) -> Option<&'static str> {
    match feedback? {
        SquareFeedback::Destination => Some("\x1b[44m"),
        SquareFeedback::Capture => Some("\x1b[41m"),
        SquareFeedback::Origin => Some("\x1b[42m"),
        SquareFeedback::Check => Some("\x1b[45m"),
        SquareFeedback::Checker => Some("\x1b[43m"),
    }
}

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal game.
///
/// Commands:
/// - `c <square>`: click a square (select a piece, or move the selected one)
/// - `m <from> <to>` or `m e2e4`: submit a move directly
/// - `load <fen> [w|b]`, `resign`, `f` (flip), `r` (reset), `p` (refresh), `q` (quit)
pub fn run_interactive_terminal(mut game: Game, flipped: bool) {
    let mut display = TerminalDisplay::new(flipped);
    let initial = game.clone();

    redraw(&mut display, &game);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "c" => {
                let Some(arg) = parts.get(1) else {
                    println!("Usage: c <square>");
                    continue;
                };
                match arg.parse::<Square>() {
                    Ok(square) => match game.click(square) {
                        Ok(_) => redraw(&mut display, &game),
                        Err(e) => println!("❌ {e}"),
                    },
                    Err(e) => println!("Invalid square: {}", e),
                }
            }
            "m" => {
                let text = parts[1..].join("");
                match parse_move(&text) {
                    Ok(mv) => match game.play(mv.from, mv.to) {
                        Ok(_) => redraw(&mut display, &game),
                        Err(e) => println!("❌ {e}"),
                    },
                    Err(e) => println!("Usage: m <from> <to> ({e})"),
                }
            }
            "load" => {
                let Some(fen) = parts.get(1) else {
                    println!("Usage: load <fen> [w|b]");
                    continue;
                };
                let turn = match parts.get(2).map(|s| parse_turn(s)) {
                    None => Color::White,
                    Some(Some(turn)) => turn,
                    Some(None) => {
                        println!("Usage: load <fen> [w|b]");
                        continue;
                    }
                };
                match Board::from_fen(fen) {
                    Ok(board) => {
                        game = Game::from_board(board, turn);
                        redraw(&mut display, &game);
                    }
                    Err(e) => println!("❌ Invalid FEN: {}", e),
                }
            }
            "resign" => match game.resign(game.turn()) {
                Ok(()) => redraw(&mut display, &game),
                Err(e) => println!("❌ {e}"),
            },
            "r" => {
                game = initial.clone();
                redraw(&mut display, &game);
                println!("\n🔄 Reset to initial state");
            }
            "f" => {
                display.toggle_flip();
                redraw(&mut display, &game);
            }
            "p" => redraw(&mut display, &game),
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Side to move from a FEN-style `w` or `b` token.
fn parse_turn(token: &str) -> Option<Color> {
    match token {
        "w" => Some(Color::White),
        "b" => Some(Color::Black),
        _ => None,
    }
}

/// Draws the complete interface: help text, status and board.
fn redraw(display: &mut TerminalDisplay, game: &Game) {
    clear_screen();
    println!("♟️  Chess");
    println!();
    println!("Commands: c <sq> | m <from> <to> | load <fen> [w|b] | resign | f | r | p | q");
    println!();

    let feedback = compute_feedback(game);
    if let Err(e) = display.show(game.board(), &feedback) {
        eprintln!("Failed to draw board: {}", e);
        return;
    }

    println!();
    if game.status().is_over() {
        println!("Game over: {}", game.status());
    } else if game.is_check() {
        println!("{} to move. Check!", game.turn());
    } else {
        println!("{} to move", game.turn());
    }
    if let Some(last) = game.history().last() {
        println!("Last move: {}", last.notation());
    }
}
