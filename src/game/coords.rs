// src/game/coords.rs

use shakmaty::{File, Rank, Square};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
}

/// A square in display coordinates: file 0..=7 left to right, rank 0..=7 top
/// to bottom (rank 0 holds the black back rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplaySquare {
    pub file: u8,
    pub rank: u8,
}

impl DisplaySquare {
    pub fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Self { file, rank }
    }

    /// Parses algebraic notation ("e4") into display coordinates.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, CoordError> {
        let invalid = || CoordError::InvalidSquare(algebraic.to_string());
        let mut chars = algebraic.chars();
        let (file_char, rank_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(invalid()),
        };
        let file = match file_char {
            'a'..='h' => file_char as u8 - b'a',
            _ => return Err(invalid()),
        };
        // Algebraic rank 1..=8 counts from the bottom; the display counts
        // from the top.
        let rank = match rank_char {
            '1'..='8' => 8 - (rank_char as u8 - b'0'),
            _ => return Err(invalid()),
        };
        Ok(Self { file, rank })
    }

    pub fn algebraic(&self) -> String {
        format!("{}{}", (b'a' + self.file) as char, 8 - self.rank)
    }

    /// Conversion to the oracle's square type. Only the oracle adapter
    /// should need this.
    pub(crate) fn to_square(self) -> Square {
        Square::from_coords(
            File::new(self.file as u32),
            Rank::new(7 - self.rank as u32),
        )
    }

    pub(crate) fn from_square(square: Square) -> Self {
        Self {
            file: square.file() as u8,
            rank: 7 - square.rank() as u8,
        }
    }
}
