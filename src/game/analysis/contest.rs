// src/game/analysis/contest.rs

use shakmaty::{Color, Role};

use crate::config::AnalysisConfig;
use crate::game::Position;

use super::{attack_map, SquareMap};

/// Both sides' pressure on one square. The components are kept separate so
/// an uncontested square (both zero) can be told apart from a balanced one
/// (equal and nonzero); `net()` collapses them into the signed score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contest {
    pub white: f32,
    pub black: f32,
}

impl Contest {
    /// Positive: net white control. Negative: net black control.
    pub fn net(&self) -> f32 {
        self.white - self.black
    }
}

pub type ContestMap = SquareMap<Contest>;

/// Combines both sides' attack maps over the union of their key sets.
/// A side missing from a square contributes 0.0.
pub fn contest_map(position: &Position, config: &AnalysisConfig) -> ContestMap {
    let white = attack_map(position, Color::White, &Role::ALL, config);
    let black = attack_map(position, Color::Black, &Role::ALL, config);

    let mut contested = ContestMap::new();
    for (square, weight) in white {
        contested.entry(square).or_default().white = weight;
    }
    for (square, weight) in black {
        contested.entry(square).or_default().black = weight;
    }
    contested
}
