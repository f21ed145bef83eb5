pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// --- Control weights ---
// How strongly a piece "holds" a square it could recapture on. Inverse to
// material value: recapturing with a cheap piece costs less, so the hold is
// stronger.
pub const PAWN_CONTROL_WEIGHT: f32 = 0.9;
pub const KNIGHT_CONTROL_WEIGHT: f32 = 0.6;
pub const BISHOP_CONTROL_WEIGHT: f32 = 0.6;
pub const ROOK_CONTROL_WEIGHT: f32 = 0.4;
pub const QUEEN_CONTROL_WEIGHT: f32 = 0.25;
pub const KING_CONTROL_WEIGHT: f32 = 0.1;

// --- Restriction thresholds ---
// A piece with at most this many safe destinations counts as restricted.
pub const QUEEN_RESTRICTION_THRESHOLD: usize = 9;
pub const ROOK_RESTRICTION_THRESHOLD: usize = 5;
pub const BISHOP_RESTRICTION_THRESHOLD: usize = 3;
pub const KNIGHT_RESTRICTION_THRESHOLD: usize = 2;
