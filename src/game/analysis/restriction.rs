// src/game/analysis/restriction.rs

use shakmaty::{Color, Role};

use crate::config::AnalysisConfig;
use crate::game::{oracle, Position};

use super::{attack_kinds, SquareSet};

/// Squares of `side`'s pieces that `side` itself defends. Used to rule out
/// capture destinations that would just be recaptured.
pub fn defended_pieces(position: &Position, side: Color) -> SquareSet {
    position
        .pieces()
        .iter()
        .filter(|p| p.color == side && oracle::is_attacked(position, p.square, side))
        .map(|p| p.square)
        .collect()
}

/// Flags near-immobilized pieces of `side`: every non-pawn, non-king piece
/// whose count of safe pseudo-legal destinations is at or below its kind's
/// threshold. A destination is safe when the opponent neither covers it nor
/// occupies it with a defended piece. Raw move counts would overstate
/// mobility by including moves into capture.
pub fn restricted_pieces(
    position: &Position,
    side: Color,
    config: &AnalysisConfig,
) -> SquareSet {
    let opponent_cover = attack_kinds(position, !side, &Role::ALL);
    let opponent_defended = defended_pieces(position, !side);
    let moves = oracle::moves_for(position, side);

    let mut restricted = SquareSet::new();
    for piece in position.pieces() {
        if piece.color != side {
            continue;
        }
        let Some(threshold) = config.restriction_threshold(piece.role) else {
            continue;
        };
        let safe_destinations = moves
            .iter()
            .filter(|(from, to)| {
                *from == piece.square
                    && !opponent_cover.contains_key(to)
                    && !opponent_defended.contains(to)
            })
            .count();
        if safe_destinations <= threshold {
            restricted.insert(piece.square);
        }
    }
    restricted
}
