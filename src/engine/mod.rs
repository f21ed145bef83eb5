// src/engine/mod.rs
//
// Binding to an external best-move supplier. The app only ever sees a UCI
// string translated into display coordinates; search and process handling
// live behind the `MoveSuggester` trait.

use rand::Rng;
use shakmaty::{fen::Fen, CastlingMode, Chess, Position as _, Role};

use crate::game::coords::{CoordError, DisplaySquare};

/// A best-move suggestion in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMove {
    pub from: DisplaySquare,
    pub to: DisplaySquare,
    pub promotion: Option<Role>,
}

impl EngineMove {
    /// Parses engine output in origin+destination(+promotion) notation,
    /// e.g. "e2e4" or "e7e8q".
    pub fn from_uci(raw: &str) -> Result<Self, CoordError> {
        if raw.len() < 4 || raw.len() > 5 || !raw.is_ascii() {
            return Err(CoordError::InvalidSquare(raw.to_string()));
        }
        let from = DisplaySquare::from_algebraic(&raw[0..2])?;
        let to = DisplaySquare::from_algebraic(&raw[2..4])?;
        let promotion = match raw.as_bytes().get(4) {
            Some(&c) => Some(
                Role::from_char(c as char)
                    .filter(|role| *role != Role::Pawn && *role != Role::King)
                    .ok_or_else(|| CoordError::InvalidSquare(raw.to_string()))?,
            ),
            None => None,
        };
        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

pub trait MoveSuggester {
    /// Syncs the supplier to a full FEN; a supplier may reject positions it
    /// cannot play from.
    fn set_position(&mut self, fen: &str);

    /// Best move in UCI notation, if the supplier has one.
    fn best_move(&mut self) -> Option<String>;
}

/// Fallback supplier: a uniformly random legal move. Stands in when no real
/// engine is wired up.
#[derive(Default)]
pub struct RandomSuggester {
    position: Option<Chess>,
}

impl MoveSuggester for RandomSuggester {
    fn set_position(&mut self, fen: &str) {
        self.position = fen
            .parse::<Fen>()
            .ok()
            .and_then(|fen| fen.into_position(CastlingMode::Standard).ok());
        if self.position.is_none() {
            tracing::warn!(fen, "suggester could not load position");
        }
    }

    fn best_move(&mut self) -> Option<String> {
        let position = self.position.as_ref()?;
        let legal_moves = position.legal_moves();
        if legal_moves.is_empty() {
            return None;
        }
        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..legal_moves.len());
        let chosen = &legal_moves[index];
        Some(chosen.to_uci(CastlingMode::Standard).to_string())
    }
}
