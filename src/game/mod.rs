// game/mod.rs

pub mod analysis;
pub mod coords;
pub mod oracle;

use shakmaty::{Board, Color, Role};
use thiserror::Error;

use crate::constants::STARTING_FEN;
use self::coords::DisplaySquare;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank '{0}' does not describe 8 squares")]
    RankLength(String),
    #[error("unrecognized piece symbol '{0}'")]
    UnknownSymbol(char),
}

/// A piece standing on the board, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub color: Color,
    pub role: Role,
    pub square: DisplaySquare,
}

/// A position snapshot: the placed pieces plus the side to move. All
/// analysis maps are derived from a snapshot and must be recomputed by the
/// caller whenever it mutates.
#[derive(Debug, Clone)]
pub struct Position {
    pieces: Vec<PlacedPiece>,
    pub side_to_move: Color,
}

impl Position {
    pub fn new_game() -> Self {
        let placement = STARTING_FEN.split(' ').next().unwrap_or_default();
        // The starting placement is well formed.
        Self::from_placement(placement, Color::White)
            .unwrap_or_else(|_| unreachable!("starting placement is valid"))
    }

    /// Parses the placement field of a FEN string (ranks 8 down to 1,
    /// run-length-encoded empty squares).
    pub fn from_placement(placement: &str, side_to_move: Color) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut pieces = Vec::new();
        for (rank, rank_str) in ranks.iter().enumerate() {
            let mut file: u8 = 0;
            for symbol in rank_str.chars() {
                if let Some(run) = symbol.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(PlacementError::UnknownSymbol(symbol));
                    }
                    file += run as u8;
                } else {
                    let role = Role::from_char(symbol.to_ascii_lowercase())
                        .ok_or(PlacementError::UnknownSymbol(symbol))?;
                    let color = Color::from_white(symbol.is_ascii_uppercase());
                    if file >= 8 {
                        return Err(PlacementError::RankLength(rank_str.to_string()));
                    }
                    pieces.push(PlacedPiece {
                        color,
                        role,
                        square: DisplaySquare::new(file, rank as u8),
                    });
                    file += 1;
                }
            }
            if file != 8 {
                return Err(PlacementError::RankLength(rank_str.to_string()));
            }
        }

        Ok(Self {
            pieces,
            side_to_move,
        })
    }

    /// Serializes the piece collection back to placement notation.
    pub fn placement(&self) -> String {
        let mut grid = [[None::<PlacedPiece>; 8]; 8];
        for piece in &self.pieces {
            grid[piece.square.rank as usize][piece.square.file as usize] = Some(*piece);
        }

        let mut ranks = Vec::with_capacity(8);
        for row in &grid {
            let mut rank_str = String::new();
            let mut blanks = 0;
            for cell in row {
                match cell {
                    Some(piece) => {
                        if blanks > 0 {
                            rank_str.push_str(&blanks.to_string());
                            blanks = 0;
                        }
                        let symbol = piece.role.char();
                        rank_str.push(if piece.color.is_white() {
                            symbol.to_ascii_uppercase()
                        } else {
                            symbol
                        });
                    }
                    None => blanks += 1,
                }
            }
            if blanks > 0 {
                rank_str.push_str(&blanks.to_string());
            }
            ranks.push(rank_str);
        }
        ranks.join("/")
    }

    /// Full FEN for the snapshot. Castling rights and en passant are not
    /// tracked by the editor, so they are always absent.
    pub fn fen(&self) -> String {
        format!("{} {} - - 0 1", self.placement(), self.side_to_move.char())
    }

    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    pub fn piece_at(&self, square: DisplaySquare) -> Option<&PlacedPiece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    pub fn king_square(&self, color: Color) -> Option<DisplaySquare> {
        self.pieces
            .iter()
            .find(|p| p.role == Role::King && p.color == color)
            .map(|p| p.square)
    }

    pub fn toggle_side(&mut self) {
        self.side_to_move = !self.side_to_move;
    }

    /// Adds a piece to the board, replacing any occupant of the square.
    pub fn drop_piece(&mut self, color: Color, role: Role, square: DisplaySquare) {
        self.pieces.retain(|p| p.square != square);
        self.pieces.push(PlacedPiece {
            color,
            role,
            square,
        });
    }

    /// Free-move board editing: relocates the piece on `from` to `to`,
    /// capturing any opposing occupant. Same-color captures and moves from
    /// an empty square are rejected. Legality is not enforced here.
    ///
    /// Pawns reaching the back rank promote, to `promotion` if given and to
    /// a queen otherwise. Returns the applied move in UCI notation.
    pub fn apply_move(
        &mut self,
        from: DisplaySquare,
        to: DisplaySquare,
        promotion: Option<Role>,
    ) -> Option<String> {
        if from == to {
            return None;
        }
        let mover = *self.piece_at(from)?;
        if let Some(target) = self.piece_at(to) {
            if target.color == mover.color {
                return None;
            }
        }
        self.pieces.retain(|p| p.square != to && p.square != from);

        let promoted = if mover.role == Role::Pawn && (to.rank == 0 || to.rank == 7) {
            Some(promotion.unwrap_or(Role::Queen))
        } else {
            None
        };
        self.pieces.push(PlacedPiece {
            color: mover.color,
            role: promoted.unwrap_or(mover.role),
            square: to,
        });

        let mut uci = format!("{}{}", from.algebraic(), to.algebraic());
        if let Some(role) = promoted {
            uci.push(role.char());
        }
        Some(uci)
    }

    /// Occupancy board for the oracle adapter.
    pub(crate) fn to_board(&self) -> Board {
        let mut board = Board::empty();
        for piece in &self.pieces {
            board.set_piece_at(
                piece.square.to_square(),
                shakmaty::Piece {
                    color: piece.color,
                    role: piece.role,
                },
            );
        }
        board
    }
}
