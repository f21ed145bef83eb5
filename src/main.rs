mod app;
mod config;
mod constants;
mod engine;
mod game;
mod ui;

use clap::Parser;
use shakmaty::Color;

use crate::app::{App, DisplayMode};
use crate::game::Position;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position to analyze, as a FEN string
    #[arg(long, default_value = crate::constants::STARTING_FEN)]
    fen: String,

    /// Initial overlay: 0 attack, 1 contest, 2 king attackers,
    /// 3 legal moves, 4 restricted pieces (omit for none)
    #[arg(long)]
    display: Option<u8>,

    /// Side whose overlays are shown; defaults to the FEN's side to move
    #[arg(long, value_parser = parse_side)]
    side: Option<Color>,
}

fn parse_side(raw: &str) -> Result<Color, String> {
    match raw {
        "w" | "white" | "1" => Ok(Color::White),
        "b" | "black" | "0" => Ok(Color::Black),
        _ => Err(format!("unrecognized side '{raw}'")),
    }
}

fn position_from_args(args: &Args) -> Result<Position, String> {
    let mut fields = args.fen.split_whitespace();
    let placement = fields.next().ok_or_else(|| "empty FEN".to_string())?;
    let fen_side = match fields.next() {
        Some("b") => Color::Black,
        _ => Color::White,
    };
    let side = args.side.unwrap_or(fen_side);
    Position::from_placement(placement, side).map_err(|e| e.to_string())
}

#[cfg(not(test))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use crossterm::{
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{prelude::CrosstermBackend, Terminal};
    use std::panic;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();
    panic::set_hook(Box::new(tracing_panic::panic_hook));

    let args = Args::parse();
    let position = position_from_args(&args)?;
    let display_mode = args
        .display
        .map(DisplayMode::from_index)
        .unwrap_or(DisplayMode::Off);

    let mut app = App::new(position, display_mode);

    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_argument_selects_position_and_side() {
        let args = Args {
            fen: "8/8/8/3k4/8/8/8/3K4 b - - 0 1".to_string(),
            display: None,
            side: None,
        };
        let position = position_from_args(&args).unwrap();
        assert_eq!(position.pieces().len(), 2);
        assert_eq!(position.side_to_move, Color::Black);
    }

    #[test]
    fn test_side_flag_overrides_fen_turn() {
        let args = Args {
            fen: crate::constants::STARTING_FEN.to_string(),
            display: None,
            side: Some(Color::Black),
        };
        let position = position_from_args(&args).unwrap();
        assert_eq!(position.side_to_move, Color::Black);
    }

    #[test]
    fn test_bad_placement_is_reported() {
        let args = Args {
            fen: "totally/wrong".to_string(),
            display: None,
            side: None,
        };
        assert!(position_from_args(&args).is_err());
    }
}
