// src/game/analysis/attack.rs

use shakmaty::{Color, Role};

use crate::config::AnalysisConfig;
use crate::game::coords::DisplaySquare;
use crate::game::{oracle, Position};

use super::SquareMap;

/// Cumulative control weight per square for one side. Sparse: a square
/// nobody touches has no entry.
pub type AttackMap = SquareMap<f32>;

/// Computes the control weight `side` exerts on every square, restricted to
/// the piece kinds in `kinds` (pass [`Role::ALL`] for everything).
///
/// Non-pawn pressure comes from pseudo-legal move destinations. Pawns are
/// handled separately: a diagonal step onto an empty square is not a move,
/// but the pawn controls it all the same, so both diagonal attack squares
/// get the pawn weight regardless of occupancy.
pub fn attack_map(
    position: &Position,
    side: Color,
    kinds: &[Role],
    config: &AnalysisConfig,
) -> AttackMap {
    let mut weights = AttackMap::new();

    for (from, to) in oracle::moves_for(position, side) {
        let Some(mover) = position.piece_at(from) else {
            continue;
        };
        if mover.role == Role::Pawn || !kinds.contains(&mover.role) {
            continue;
        }
        *weights.entry(to).or_insert(0.0) += config.control_weight(mover.role);
    }

    if kinds.contains(&Role::Pawn) {
        for square in pawns_of(position, side) {
            for attacked in oracle::pawn_attack_squares(square, side) {
                *weights.entry(attacked).or_insert(0.0) += config.control_weight(Role::Pawn);
            }
        }
    }

    weights
}

/// Structural cousin of [`attack_map`]: records, per square, a piece kind of
/// `side` that covers it. When several kinds cover the same square one of
/// them wins; the restriction analyzer only cares about presence.
pub fn attack_kinds(position: &Position, side: Color, kinds: &[Role]) -> SquareMap<Role> {
    let mut covered = SquareMap::new();

    for (from, to) in oracle::moves_for(position, side) {
        let Some(mover) = position.piece_at(from) else {
            continue;
        };
        if mover.role == Role::Pawn || !kinds.contains(&mover.role) {
            continue;
        }
        covered.insert(to, mover.role);
    }

    if kinds.contains(&Role::Pawn) {
        for square in pawns_of(position, side) {
            for attacked in oracle::pawn_attack_squares(square, side) {
                covered.insert(attacked, Role::Pawn);
            }
        }
    }

    covered
}

fn pawns_of(position: &Position, side: Color) -> impl Iterator<Item = DisplaySquare> + '_ {
    position
        .pieces()
        .iter()
        .filter(move |p| p.role == Role::Pawn && p.color == side)
        .map(|p| p.square)
}
