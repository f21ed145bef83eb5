//! Board-control analysis of a position snapshot.
//!
//! Every function here is pure: it takes a complete [`Position`], returns a
//! freshly allocated map or set, and shares no state between calls. The
//! caller decides when a mutation invalidates previous results.

pub mod attack;
pub mod contest;
pub mod king_zone;
pub mod restriction;

use shakmaty::Color;
use std::collections::BTreeMap;
use thiserror::Error;

use super::coords::DisplaySquare;

pub use attack::{attack_kinds, attack_map, AttackMap};
pub use contest::{contest_map, Contest, ContestMap};
pub use king_zone::king_attackers;
pub use restriction::restricted_pieces;

pub type SquareSet = std::collections::BTreeSet<DisplaySquare>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no {0:?} king on the board")]
    MissingKing(Color),
}

/// Sparse per-square map; squares with no entry carry none of whatever the
/// map measures.
pub type SquareMap<T> = BTreeMap<DisplaySquare, T>;

#[cfg(test)]
pub mod tests;
