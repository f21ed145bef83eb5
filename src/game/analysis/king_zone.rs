// src/game/analysis/king_zone.rs

use shakmaty::{Color, Role};

use crate::game::coords::DisplaySquare;
use crate::game::{oracle, Position};

use super::{AnalysisError, SquareSet};

/// The Moore neighborhood of `king`, clamped to the board. A corner king
/// has 4 squares in its zone, an edge king 6, anyone else 9 (the king's own
/// square included).
pub fn king_zone(king: DisplaySquare) -> SquareSet {
    let mut zone = SquareSet::new();
    for df in -1..=1i16 {
        for dr in -1..=1i16 {
            let file = (king.file as i16 + df).clamp(0, 7) as u8;
            let rank = (king.rank as i16 + dr).clamp(0, 7) as u8;
            zone.insert(DisplaySquare::new(file, rank));
        }
    }
    zone
}

/// Origin squares of every piece of `side` bearing on the opposing king's
/// zone: pseudo-legal moves landing in the zone, plus pawns whose diagonal
/// attacks intersect it.
///
/// A board without the opposing king cannot be analyzed; that is an
/// explicit error, not an empty answer.
pub fn king_attackers(position: &Position, side: Color) -> Result<SquareSet, AnalysisError> {
    let king = position
        .king_square(!side)
        .ok_or(AnalysisError::MissingKing(!side))?;
    let zone = king_zone(king);

    let mut attackers = SquareSet::new();
    for (from, to) in oracle::moves_for(position, side) {
        if zone.contains(&to) {
            attackers.insert(from);
        }
    }

    for piece in position.pieces() {
        if piece.role != Role::Pawn || piece.color != side {
            continue;
        }
        if oracle::pawn_attack_squares(piece.square, side)
            .iter()
            .any(|attacked| zone.contains(attacked))
        {
            attackers.insert(piece.square);
        }
    }

    Ok(attackers)
}
