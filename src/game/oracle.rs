// src/game/oracle.rs
//
// The only module that consumes chess-legality knowledge. Everything above
// it works in display coordinates and (origin, destination) pairs.

use shakmaty::{attacks, fen::Fen, CastlingMode, Chess, Color, File, Move, Position as _, Rank, Role, Square};
use thiserror::Error;

use super::coords::DisplaySquare;
use super::Position;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("malformed position notation '{0}'")]
    Notation(String),
    #[error("position is not playable with {side:?} to move: {reason}")]
    AmbiguousTurnState { side: Color, reason: String },
}

/// A pseudo-legal move as seen by the analysis layers. Promotion pieces are
/// discarded at this boundary.
pub type MovePair = (DisplaySquare, DisplaySquare);

/// All pseudo-legal moves for `side`, regardless of whose turn the position
/// records. The underlying move generator only answers for the side to
/// move, so the side is taken explicitly here instead of leaning on a
/// null-move convention.
pub fn moves_for(position: &Position, side: Color) -> Vec<MovePair> {
    let board = position.to_board();
    let occupied = board.occupied();
    let ours = board.by_color(side);
    let theirs = board.by_color(!side);

    let mut moves = Vec::new();
    for from in ours {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        match piece.role {
            Role::Pawn => {
                // Diagonal steps only count as moves when they capture.
                for to in attacks::pawn_attacks(side, from) & theirs {
                    moves.push(pair(from, to));
                }
                let forward = if side.is_white() { 8 } else { -8 };
                if let Some(push) = from.offset(forward) {
                    if !occupied.contains(push) {
                        moves.push(pair(from, push));
                        let home_rank = if side.is_white() {
                            Rank::Second
                        } else {
                            Rank::Seventh
                        };
                        if from.rank() == home_rank {
                            if let Some(double) = push.offset(forward) {
                                if !occupied.contains(double) {
                                    moves.push(pair(from, double));
                                }
                            }
                        }
                    }
                }
            }
            _ => {
                for to in attacks::attacks(from, piece, occupied) & !ours {
                    moves.push(pair(from, to));
                }
            }
        }
    }
    moves
}

/// Whether any piece of `by` attacks `square`.
pub fn is_attacked(position: &Position, square: DisplaySquare, by: Color) -> bool {
    let board = position.to_board();
    !board
        .attacks_to(square.to_square(), by, board.occupied())
        .is_empty()
}

/// The two diagonal squares a pawn of `color` on `square` attacks, clamped
/// at the board edge (one square on the a- and h-files).
pub fn pawn_attack_squares(square: DisplaySquare, color: Color) -> Vec<DisplaySquare> {
    attacks::pawn_attacks(color, square.to_square())
        .into_iter()
        .map(DisplaySquare::from_square)
        .collect()
}

/// Strictly-legal destinations of the piece on `from`, checks and pins
/// included. An empty square has no moves. The mover's color decides whose
/// turn the legality oracle is queried for; a position that is not playable
/// with that side to move (the opposing king already in check, say) is an
/// error rather than a silent empty answer.
pub fn legal_destinations(
    position: &Position,
    from: DisplaySquare,
) -> Result<Vec<DisplaySquare>, OracleError> {
    let Some(piece) = position.piece_at(from) else {
        return Ok(Vec::new());
    };
    let side = piece.color;

    let fen_str = format!("{} {} - - 0 1", position.placement(), side.char());
    let fen: Fen = fen_str
        .parse()
        .map_err(|_| OracleError::Notation(fen_str.clone()))?;
    let chess: Chess = fen
        .into_position(CastlingMode::Standard)
        .map_err(|e| OracleError::AmbiguousTurnState {
            side,
            reason: e.to_string(),
        })?;

    let origin = from.to_square();
    let mut destinations = Vec::new();
    for m in chess.legal_moves() {
        if m.from() != Some(origin) {
            continue;
        }
        let to = match &m {
            // Castling is encoded king-takes-rook by the oracle; report the
            // king's landing square instead.
            Move::Castle { king, rook } => {
                let file = if rook > king { File::G } else { File::C };
                Square::from_coords(file, king.rank())
            }
            _ => m.to(),
        };
        destinations.push(DisplaySquare::from_square(to));
    }
    destinations.sort();
    destinations.dedup();
    Ok(destinations)
}

fn pair(from: Square, to: Square) -> MovePair {
    (
        DisplaySquare::from_square(from),
        DisplaySquare::from_square(to),
    )
}
