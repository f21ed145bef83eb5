// app/mod.rs

use crossterm::event::{self, Event, KeyCode};
use ratatui::{prelude::*, Terminal};
use shakmaty::{Color, Role};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{self, AnalysisConfig};
use crate::engine::{EngineMove, MoveSuggester, RandomSuggester};
use crate::game::analysis::{
    attack_map, contest_map, king_attackers, restricted_pieces, AttackMap, ContestMap, SquareSet,
};
use crate::game::coords::DisplaySquare;
use crate::game::{oracle, Position};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayMode {
    Off,
    Attack,
    Contest,
    KingAttackers,
    LegalMoves,
    Restricted,
}

impl DisplayMode {
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => DisplayMode::Attack,
            1 => DisplayMode::Contest,
            2 => DisplayMode::KingAttackers,
            3 => DisplayMode::LegalMoves,
            4 => DisplayMode::Restricted,
            _ => DisplayMode::Off,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Off => "off",
            DisplayMode::Attack => "attack map",
            DisplayMode::Contest => "contested squares",
            DisplayMode::KingAttackers => "king attackers",
            DisplayMode::LegalMoves => "legal moves",
            DisplayMode::Restricted => "restricted pieces",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum InputContext {
    Move,
    Drop,
}

/// Every overlay the renderer can show, recomputed together whenever the
/// position changes. Maps never outlive the snapshot they were derived
/// from.
#[derive(Default)]
pub struct Overlays {
    pub attack: AttackMap,
    pub contest: ContestMap,
    pub king_attackers: SquareSet,
    pub legal_moves: SquareSet,
    pub restricted: SquareSet,
}

pub struct App {
    pub position: Position,
    pub display_mode: DisplayMode,
    pub selected: Option<DisplaySquare>,
    pub overlays: Overlays,
    pub config: AnalysisConfig,
    pub user_input: String,
    pub error_message: Option<String>,
    pub log: Vec<String>,
    input_context: InputContext,
    overlays_dirty: bool,
    should_quit: bool,
    suggester: Box<dyn MoveSuggester>,
}

impl App {
    pub fn new(position: Position, display_mode: DisplayMode) -> Self {
        let config = config::load_profile("default").unwrap_or_default();
        let mut suggester: Box<dyn MoveSuggester> = Box::<RandomSuggester>::default();
        suggester.set_position(&position.fen());

        Self {
            position,
            display_mode,
            selected: None,
            overlays: Overlays::default(),
            config,
            user_input: String::new(),
            error_message: None,
            log: Vec::new(),
            input_context: InputContext::Move,
            overlays_dirty: true,
            should_quit: false,
            suggester,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            if self.overlays_dirty {
                self.refresh_overlays();
            }
            terminal.draw(|f| crate::ui::draw(f, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Recomputes every overlay from the current snapshot. Analysis errors
    /// degrade to an empty overlay plus a message; the board must stay
    /// responsive on partially invalid positions.
    fn refresh_overlays(&mut self) {
        let side = self.position.side_to_move;
        self.overlays.attack = attack_map(&self.position, side, &Role::ALL, &self.config);
        self.overlays.contest = contest_map(&self.position, &self.config);

        self.overlays.king_attackers = match king_attackers(&self.position, side) {
            Ok(attackers) => attackers,
            Err(e) => {
                warn!(error = %e, "king-safety overlay unavailable");
                self.error_message = Some(e.to_string());
                SquareSet::new()
            }
        };

        self.overlays.legal_moves = match self.selected {
            Some(square) => match oracle::legal_destinations(&self.position, square) {
                Ok(destinations) => destinations.into_iter().collect(),
                Err(e) => {
                    warn!(error = %e, "legal-move overlay unavailable");
                    self.error_message = Some(e.to_string());
                    SquareSet::new()
                }
            },
            None => SquareSet::new(),
        };

        self.overlays.restricted = restricted_pieces(&self.position, side, &self.config);
        self.overlays_dirty = false;
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => {
                self.user_input.clear();
                self.input_context = InputContext::Move;
            }
            KeyCode::Backspace => {
                self.user_input.pop();
            }
            KeyCode::Tab => self.set_display_mode(DisplayMode::Off),
            KeyCode::Enter => self.commit_input(),
            // Command keys apply only while nothing is typed, so that move
            // input like "a2a4" is never swallowed.
            KeyCode::Char(c) if self.user_input.is_empty() && self.input_context == InputContext::Move => {
                match c {
                    'q' => self.should_quit = true,
                    ' ' => self.toggle_side(),
                    'r' => self.request_engine_move(),
                    'p' => {
                        self.input_context = InputContext::Drop;
                        self.error_message = None;
                    }
                    '0'..='4' => self.set_display_mode(DisplayMode::from_index(c as u8 - b'0')),
                    'a'..='h' => {
                        self.error_message = None;
                        self.user_input.push(c);
                    }
                    _ => {}
                }
            }
            KeyCode::Char(c) => {
                self.user_input.push(c);
            }
            _ => {}
        }
    }

    fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
        info!(mode = mode.label(), "display mode changed");
        self.push_log(format!("Now viewing: {}", mode.label()));
    }

    fn toggle_side(&mut self) {
        self.position.toggle_side();
        self.suggester.set_position(&self.position.fen());
        self.overlays_dirty = true;
        self.push_log(format!(
            "{:?} to play",
            self.position.side_to_move
        ));
    }

    /// Interprets the typed buffer: a square selects (legal-move overlay),
    /// a 4-5 character move edits the board, and in drop context a piece
    /// letter plus square drops a piece of the side to move.
    fn commit_input(&mut self) {
        let input = std::mem::take(&mut self.user_input);
        let input = input.trim().to_string();
        if input.is_empty() {
            self.input_context = InputContext::Move;
            return;
        }
        match self.input_context {
            InputContext::Drop => {
                self.input_context = InputContext::Move;
                self.handle_drop_input(&input);
            }
            InputContext::Move if input.len() == 2 => match DisplaySquare::from_algebraic(&input) {
                Ok(square) => {
                    self.selected = Some(square);
                    self.overlays_dirty = true;
                }
                Err(e) => self.error_message = Some(e.to_string()),
            },
            InputContext::Move => self.handle_move_input(&input),
        }
    }

    fn handle_move_input(&mut self, input: &str) {
        match EngineMove::from_uci(input) {
            Ok(m) => match self.position.apply_move(m.from, m.to, m.promotion) {
                Some(uci) => self.register_edit(format!("Played {uci}")),
                None => self.error_message = Some(format!("rejected move '{input}'")),
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn handle_drop_input(&mut self, input: &str) {
        let mut chars = input.chars();
        let role = chars
            .next()
            .and_then(|c| Role::from_char(c.to_ascii_lowercase()));
        let square = DisplaySquare::from_algebraic(chars.as_str());
        match (role, square) {
            (Some(role), Ok(square)) => {
                let color = self.position.side_to_move;
                self.position.drop_piece(color, role, square);
                self.register_edit(format!(
                    "Dropped {:?} {:?} on {}",
                    color,
                    role,
                    square.algebraic()
                ));
            }
            _ => {
                self.error_message =
                    Some(format!("cannot parse drop '{input}' (expected e.g. Nd5)"));
            }
        }
    }

    fn request_engine_move(&mut self) {
        self.suggester.set_position(&self.position.fen());
        let Some(raw) = self.suggester.best_move() else {
            self.error_message = Some("engine has no move available".to_string());
            return;
        };
        match EngineMove::from_uci(&raw) {
            Ok(m) => match self.position.apply_move(m.from, m.to, m.promotion) {
                Some(uci) => {
                    info!(uci, "engine move applied");
                    self.register_edit(format!("Engine has played {uci}"));
                }
                None => self.error_message = Some(format!("engine move '{raw}' rejected")),
            },
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn register_edit(&mut self, message: String) {
        self.error_message = None;
        self.overlays_dirty = true;
        self.suggester.set_position(&self.position.fen());
        self.push_log(message);
    }

    fn push_log(&mut self, message: String) {
        self.log.push(message);
        if self.log.len() > 50 {
            self.log.remove(0);
        }
    }
}
