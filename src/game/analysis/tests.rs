//! Unit tests for the board-control analysis.

use super::*;
use crate::config::AnalysisConfig;
use crate::game::Position;
use shakmaty::Role;

fn sq(algebraic: &str) -> DisplaySquare {
    DisplaySquare::from_algebraic(algebraic).unwrap()
}

fn position(placement: &str, side: Color) -> Position {
    Position::from_placement(placement, side).unwrap()
}

#[test]
fn test_attack_weights_are_non_negative() {
    let config = AnalysisConfig::default();
    let pos = position("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R", Color::White);
    for side in Color::ALL {
        let map = attack_map(&pos, side, &Role::ALL, &config);
        assert!(!map.is_empty());
        assert!(map.values().all(|w| *w >= 0.0));
    }
}

#[test]
fn test_contest_net_matches_attack_difference() {
    let config = AnalysisConfig::default();
    let pos = position("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R", Color::White);
    let white = attack_map(&pos, Color::White, &Role::ALL, &config);
    let black = attack_map(&pos, Color::Black, &Role::ALL, &config);
    let contested = contest_map(&pos, &config);

    let mut keys: Vec<_> = white.keys().chain(black.keys()).copied().collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys, contested.keys().copied().collect::<Vec<_>>());

    for (square, contest) in &contested {
        let expected = white.get(square).copied().unwrap_or(0.0)
            - black.get(square).copied().unwrap_or(0.0);
        assert!((contest.net() - expected).abs() < f32::EPSILON);
    }
}

#[test]
fn test_contest_tracks_both_components() {
    let config = AnalysisConfig::default();
    // White pawn a2 and black pawn a4 both press b3: the net is zero but
    // the square is contested, not empty.
    let pos = position("8/8/8/8/p7/8/P7/8", Color::White);
    let contested = contest_map(&pos, &config);
    let b3 = contested.get(&sq("b3")).unwrap();
    assert_eq!(b3.net(), 0.0);
    assert_eq!((b3.white, b3.black), (0.9, 0.9));
}

#[test]
fn test_edge_pawn_attacks_one_square_interior_pawn_two() {
    let config = AnalysisConfig::default();

    let edge = position("8/8/8/8/P7/8/8/8", Color::White);
    let map = attack_map(&edge, Color::White, &[Role::Pawn], &config);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&sq("b5")), Some(&0.9));

    let interior = position("8/8/8/8/4P3/8/8/8", Color::White);
    let map = attack_map(&interior, Color::White, &[Role::Pawn], &config);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&sq("d5")), Some(&0.9));
    assert_eq!(map.get(&sq("f5")), Some(&0.9));
}

#[test]
fn test_pawn_weight_lands_regardless_of_occupancy() {
    let config = AnalysisConfig::default();
    // The white pawn's attack squares are occupied by its own pieces; the
    // pawn still controls them.
    let pos = position("8/8/8/2N1N3/3P4/8/8/8", Color::White);
    let map = attack_map(&pos, Color::White, &[Role::Pawn], &config);
    assert_eq!(map.get(&sq("c5")), Some(&0.9));
    assert_eq!(map.get(&sq("e5")), Some(&0.9));
}

#[test]
fn test_knights_only_map_in_starting_position() {
    let config = AnalysisConfig::default();
    let pos = Position::new_game();
    let map = attack_map(&pos, Color::White, &[Role::Knight], &config);

    let expected: AttackMap = [sq("a3"), sq("c3"), sq("f3"), sq("h3")]
        .into_iter()
        .map(|square| (square, 0.6))
        .collect();
    assert_eq!(map, expected);
}

#[test]
fn test_rook_slides_along_the_d_file() {
    let config = AnalysisConfig::default();
    let pos = position("3k4/8/8/8/3R4/8/8/8", Color::White);
    let map = attack_map(&pos, Color::White, &[Role::Rook], &config);

    for algebraic in ["d1", "d2", "d3", "d5", "d6", "d7", "d8"] {
        assert_eq!(map.get(&sq(algebraic)), Some(&0.4), "missing {algebraic}");
    }
    // The rook's rank is controlled too.
    assert_eq!(map.get(&sq("a4")), Some(&0.4));
    assert_eq!(map.get(&sq("h4")), Some(&0.4));
}

#[test]
fn test_attack_weights_accumulate() {
    let config = AnalysisConfig::default();
    // Rooks on a1 and d1 both slide over c1.
    let pos = position("8/8/8/8/8/8/8/R2R4", Color::White);
    let map = attack_map(&pos, Color::White, &[Role::Rook], &config);
    assert!((map.get(&sq("c1")).unwrap() - 0.8).abs() < f32::EPSILON);
}

#[test]
fn test_attack_kinds_marks_covered_squares() {
    let pos = position("8/8/8/8/3P4/8/8/3R4", Color::White);
    let covered = attack_kinds(&pos, Color::White, &Role::ALL);
    assert_eq!(covered.get(&sq("d3")), Some(&Role::Rook));
    assert_eq!(covered.get(&sq("c5")), Some(&Role::Pawn));
    assert_eq!(covered.get(&sq("e5")), Some(&Role::Pawn));
    assert!(!covered.contains_key(&sq("a8")));
}

#[test]
fn test_king_zone_clamps_at_corners_and_edges() {
    assert_eq!(king_zone::king_zone(sq("a1")).len(), 4);
    assert_eq!(king_zone::king_zone(sq("e1")).len(), 6);
    assert_eq!(king_zone::king_zone(sq("e4")).len(), 9);
}

#[test]
fn test_no_king_attackers_in_starting_position() {
    let pos = Position::new_game();
    let attackers = king_attackers(&pos, Color::White).unwrap();
    assert!(attackers.is_empty());
}

#[test]
fn test_queen_attacking_the_king_zone_is_reported_by_origin() {
    // The white queen on h5 reaches f7, inside the black king's zone.
    let pos = position("4k3/8/8/7Q/8/8/8/4K3", Color::White);
    let attackers = king_attackers(&pos, Color::White).unwrap();
    assert!(attackers.contains(&sq("h5")));
}

#[test]
fn test_pawn_diagonals_count_as_king_zone_attacks() {
    // The pawn's diagonal attacks on c8 and e8 are not pseudo-legal moves,
    // but they bear on the king zone.
    let pos = position("4k3/3P4/8/8/8/8/8/4K3", Color::White);
    let attackers = king_attackers(&pos, Color::White).unwrap();
    assert!(attackers.contains(&sq("d7")));
}

#[test]
fn test_missing_king_is_an_explicit_error() {
    let pos = position("8/8/8/8/3R4/8/8/3K4", Color::White);
    assert_eq!(
        king_attackers(&pos, Color::White),
        Err(AnalysisError::MissingKing(Color::Black))
    );
}

#[test]
fn test_knight_with_two_safe_squares_is_restricted() {
    let config = AnalysisConfig::default();
    // A corner knight has exactly two destinations, both safe.
    let pos = position("8/8/8/8/8/8/8/N7", Color::White);
    let restricted = restricted_pieces(&pos, Color::White, &config);
    assert_eq!(restricted.into_iter().collect::<Vec<_>>(), vec![sq("a1")]);
}

#[test]
fn test_knight_with_three_safe_squares_is_not_restricted() {
    let config = AnalysisConfig::default();
    let pos = position("8/8/8/8/8/8/8/1N6", Color::White);
    let restricted = restricted_pieces(&pos, Color::White, &config);
    assert!(restricted.is_empty());
}

#[test]
fn test_opponent_cover_shrinks_the_safe_count() {
    let config = AnalysisConfig::default();
    // The b1 knight has three destinations. The black rook on a3 covers
    // c3, and capturing the undefended rook itself stays safe, leaving two
    // safe squares: a3 and d2.
    let pos = position("8/8/8/8/8/r7/8/1N6", Color::White);
    let restricted = restricted_pieces(&pos, Color::White, &config);
    assert!(restricted.contains(&sq("b1")));
}

#[test]
fn test_defended_capture_targets_are_not_safe() {
    // The black rook on a5 defends the pawn on a3. Capturing that pawn is
    // not a safe knight destination; the undefended pawn on c3 is.
    let pos = position("8/8/8/r7/8/p1p5/8/1N6", Color::White);
    let defended = restriction::defended_pieces(&pos, Color::Black);
    assert_eq!(defended.into_iter().collect::<Vec<_>>(), vec![sq("a3")]);
}

#[test]
fn test_pawns_and_kings_are_never_flagged() {
    let config = AnalysisConfig::default();
    // A cornered king and pawn have almost no moves, but restriction only
    // looks at minor and major pieces.
    let pos = position("8/8/8/8/8/8/P7/K7", Color::White);
    let restricted = restricted_pieces(&pos, Color::White, &config);
    assert!(restricted.is_empty());
}

#[test]
fn test_restriction_ignores_opponent_pieces() {
    let config = AnalysisConfig::default();
    // Black's trapped-looking rook is not side-to-analyze material.
    let pos = position("r7/8/8/8/8/8/8/7Q", Color::White);
    let restricted = restricted_pieces(&pos, Color::White, &config);
    assert!(!restricted.contains(&sq("a8")));
}
