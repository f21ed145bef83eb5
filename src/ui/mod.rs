// ui/mod.rs

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use shakmaty::Role;

use crate::app::{App, DisplayMode};
use crate::game::coords::DisplaySquare;
use crate::game::PlacedPiece;

pub fn draw(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Status bar
            Constraint::Min(11),    // Board
            Constraint::Length(8),  // Input help and log
        ])
        .split(frame.size());

    draw_status_bar(frame, app, main_chunks[0]);
    draw_board(frame, app, main_chunks[1]);
    draw_bottom_pane(frame, app, main_chunks[2]);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        "{:?} to play | overlay: {} | input: {}_",
        app.position.side_to_move,
        app.display_mode.label(),
        app.user_input,
    );
    let title = match &app.error_message {
        Some(message) => format!("Analysis Board — {message}"),
        None => "Analysis Board".to_string(),
    };
    let widget = Paragraph::new(status)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(widget, area);
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect) {
    let mut board_text = Text::default();

    for rank in 0..8u8 {
        let mut line = Line::default();
        line.spans.push(Span::styled(
            format!("{} ", 8 - rank),
            Style::default().fg(Color::Gray),
        ));
        for file in 0..8u8 {
            let square = DisplaySquare::new(file, rank);
            let piece = app.position.piece_at(square);
            let symbol = piece_symbol(piece);

            let base = if (file + rank) % 2 == 0 {
                Color::Rgb(240, 217, 181) // Light square
            } else {
                Color::Rgb(181, 136, 99) // Dark square
            };
            let bg_color = overlay_color(app, square).unwrap_or(base);

            let fg_color = match piece {
                Some(p) if p.color.is_white() => Color::White,
                Some(_) => Color::Black,
                None => bg_color,
            };

            line.spans.push(Span::styled(
                format!(" {symbol} "),
                Style::default().bg(bg_color).fg(fg_color),
            ));
        }
        board_text.lines.push(line);
    }

    let mut file_labels = Line::default();
    file_labels.spans.push(Span::raw("  "));
    for file in 'a'..='h' {
        file_labels.spans.push(Span::styled(
            format!(" {file} "),
            Style::default().fg(Color::Gray),
        ));
    }
    board_text.lines.push(file_labels);

    let board_widget = Paragraph::new(board_text)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(board_widget, area);
}

/// Maps the active overlay to a highlight for one square, if any.
fn overlay_color(app: &App, square: DisplaySquare) -> Option<Color> {
    match app.display_mode {
        DisplayMode::Off => None,
        DisplayMode::Attack => {
            let weight = app.overlays.attack.get(&square)?;
            Some(Color::Rgb(0, 0, weight_level(*weight)))
        }
        DisplayMode::Contest => {
            let contest = app.overlays.contest.get(&square)?;
            let net = contest.net();
            if net > 0.0 {
                Some(Color::Rgb(0, 0, weight_level(net)))
            } else if net < 0.0 {
                Some(Color::Rgb(0, weight_level(-net), 0))
            } else {
                // Balanced squares stay unpainted even though both sides
                // press on them.
                None
            }
        }
        DisplayMode::KingAttackers => app
            .overlays
            .king_attackers
            .contains(&square)
            .then_some(Color::Rgb(200, 0, 0)),
        DisplayMode::LegalMoves => app
            .overlays
            .legal_moves
            .contains(&square)
            .then_some(Color::Rgb(238, 230, 0)),
        DisplayMode::Restricted => app
            .overlays
            .restricted
            .contains(&square)
            .then_some(Color::Rgb(200, 0, 0)),
    }
}

/// Stronger pressure, brighter highlight.
fn weight_level(weight: f32) -> u8 {
    (80.0 + weight * 70.0).min(255.0) as u8
}

fn draw_bottom_pane(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let help = "0-4: overlays (attack/contest/king/legal/restricted) | Tab: off\n\
                type a move (e2e4) or a square (g1) and press Enter\n\
                p: drop piece (Nd5) | space: switch side | r: engine move | q: quit";
    let help_widget = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL).title("Keys"))
        .wrap(Wrap { trim: true });
    frame.render_widget(help_widget, bottom_layout[0]);

    let log_items: Vec<ListItem> = app
        .log
        .iter()
        .rev()
        .map(|msg| ListItem::new(msg.as_str()))
        .collect();
    let log_list =
        List::new(log_items).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(log_list, bottom_layout[1]);
}

fn piece_symbol(piece: Option<&PlacedPiece>) -> &'static str {
    let Some(piece) = piece else {
        return " ";
    };
    match (piece.color.is_white(), piece.role) {
        (true, Role::King) => "♔",
        (true, Role::Queen) => "♕",
        (true, Role::Rook) => "♖",
        (true, Role::Bishop) => "♗",
        (true, Role::Knight) => "♘",
        (true, Role::Pawn) => "♙",
        (false, Role::King) => "♚",
        (false, Role::Queen) => "♛",
        (false, Role::Rook) => "♜",
        (false, Role::Bishop) => "♝",
        (false, Role::Knight) => "♞",
        (false, Role::Pawn) => "♟",
    }
}
