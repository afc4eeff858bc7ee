use chess_rules::{Board, Color, Game, terminal};
use clap::Parser;

/// Play chess in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Start from this position (FEN; only the piece placement is read)
    #[arg(long)]
    fen: Option<String>,

    /// Black moves first
    #[arg(long)]
    black: bool,

    /// Draw the board from Black's side
    #[arg(long)]
    flip: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let turn = if cli.black { Color::Black } else { Color::White };
    let game = match cli.fen.as_deref().map(Board::from_fen).transpose() {
        Ok(Some(board)) => Game::from_board(board, turn),
        Ok(None) => Game::from_board(Board::starting(), turn),
        Err(e) => {
            log::error!("invalid --fen: {e}");
            std::process::exit(2);
        }
    };

    log::info!("starting game: {game:?}");
    terminal::run_interactive_terminal(game, cli.flip);
}
