//! Attack generation: precomputed tables for leapers, ray-walking for sliders.

mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::square::Square;

use self::tables::{BETWEEN, KING_ATTACKS, KNIGHT_ATTACKS, LINE, PAWN_ATTACKS};

/// Rook step directions: (delta rank, delta file).
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop step directions: (delta rank, delta file).
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Return the squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Return the squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Return the squares a pawn of `color` on `sq` attacks.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Walk from `sq` in direction `(dr, df)`, including every square stepped
/// onto, and stopping after including the first occupied square (or upon
/// stepping off the board).
pub fn ray_attacks_from(sq: Square, dr: i8, df: i8, occupied: Bitboard) -> Bitboard {
    let mut bits = 0u64;
    let mut rank = sq.rank().index() as i8;
    let mut file = sq.file().index() as i8;

    loop {
        rank += dr;
        file += df;
        if !(0..8).contains(&rank) || !(0..8).contains(&file) {
            break;
        }
        let step = Square::new(
            crate::rank::Rank::from_index(rank as u8).unwrap(),
            crate::file::File::from_index(file as u8).unwrap(),
        );
        bits |= step.bitboard().inner();
        if occupied.contains(step) {
            break;
        }
    }

    Bitboard::new(bits)
}

/// Return rook attacks from `sq` given `occupied` squares, via ray-walking.
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for (dr, df) in ROOK_DIRS {
        attacks |= ray_attacks_from(sq, dr, df, occupied);
    }
    attacks
}

/// Return bishop attacks from `sq` given `occupied` squares, via ray-walking.
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for (dr, df) in BISHOP_DIRS {
        attacks |= ray_attacks_from(sq, dr, df, occupied);
    }
    attacks
}

/// Return queen attacks from `sq` given `occupied` squares.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Return squares strictly between `sq1` and `sq2` (exclusive of both endpoints).
///
/// Returns an empty bitboard if the two squares are not on the same rank, file,
/// or diagonal.
#[inline]
pub fn between(sq1: Square, sq2: Square) -> Bitboard {
    BETWEEN[sq1.index()][sq2.index()]
}

/// Return all squares on the line through `sq1` and `sq2`, including both endpoints
/// and extending to the board edges.
///
/// Returns an empty bitboard if the two squares are not on the same rank, file,
/// or diagonal.
#[inline]
pub fn line(sq1: Square, sq2: Square) -> Bitboard {
    LINE[sq1.index()][sq2.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::Bitboard;
    use crate::color::Color;
    use crate::square::Square;

    // --- Leaper spot checks ---

    #[test]
    fn knight_e4_has_8_attacks() {
        assert_eq!(knight_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn knight_a1_has_2_attacks() {
        assert_eq!(knight_attacks(Square::A1).count(), 2);
    }

    #[test]
    fn king_e1_has_5_attacks() {
        assert_eq!(king_attacks(Square::E1).count(), 5);
    }

    #[test]
    fn king_e4_has_8_attacks() {
        assert_eq!(king_attacks(Square::E4).count(), 8);
    }

    #[test]
    fn pawn_no_wrap_file_a() {
        // White pawn on A4 should attack B5 only (not wrap to H-file).
        let attacks = pawn_attacks(Color::White, Square::A4);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.contains(Square::B5));
    }

    #[test]
    fn pawn_no_wrap_file_h() {
        let attacks = pawn_attacks(Color::White, Square::H4);
        assert_eq!(attacks.count(), 1);
        assert!(attacks.contains(Square::G5));
    }

    #[test]
    fn pawn_black_attacks_south() {
        let attacks = pawn_attacks(Color::Black, Square::E5);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.contains(Square::D4));
        assert!(attacks.contains(Square::F4));
    }

    // --- Sliding piece on empty board ---

    #[test]
    fn rook_empty_board_always_14() {
        for sq in Square::all() {
            assert_eq!(
                rook_attacks(sq, Bitboard::EMPTY).count(),
                14,
                "rook on {} should have 14 attacks on empty board",
                sq
            );
        }
    }

    #[test]
    fn bishop_d4_empty_board_13() {
        assert_eq!(bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
    }

    // --- Blocker test ---

    #[test]
    fn rook_e4_blocked_e6() {
        let occupied = Square::E6.bitboard();
        let attacks = rook_attacks(Square::E4, occupied);
        assert!(attacks.contains(Square::E5));
        assert!(attacks.contains(Square::E6)); // blocker square included
        assert!(!attacks.contains(Square::E7)); // blocked beyond
    }

    #[test]
    fn bishop_blocked_by_own_or_enemy_alike() {
        let occupied = Square::F6.bitboard();
        let attacks = bishop_attacks(Square::D4, occupied);
        assert!(attacks.contains(Square::E5));
        assert!(attacks.contains(Square::F6));
        assert!(!attacks.contains(Square::G7));
    }

    #[test]
    fn queen_attacks_union_rook_and_bishop() {
        let occupied = Bitboard::EMPTY;
        let queen = queen_attacks(Square::D4, occupied);
        let expected = rook_attacks(Square::D4, occupied) | bishop_attacks(Square::D4, occupied);
        assert_eq!(queen, expected);
    }

    // --- BETWEEN / LINE ---

    #[test]
    fn between_e1_e4() {
        let bb = between(Square::E1, Square::E4);
        assert_eq!(bb.count(), 2);
        assert!(bb.contains(Square::E2));
        assert!(bb.contains(Square::E3));
    }

    #[test]
    fn between_a1_h8() {
        let bb = between(Square::A1, Square::H8);
        assert_eq!(bb.count(), 6); // B2..G7
    }

    #[test]
    fn between_non_aligned_empty() {
        let bb = between(Square::A1, Square::B3);
        assert!(bb.is_empty());
    }

    #[test]
    fn line_a1_h8() {
        let bb = line(Square::A1, Square::H8);
        assert_eq!(bb.count(), 8); // full main diagonal
    }

    #[test]
    fn line_non_aligned_empty() {
        let bb = line(Square::A1, Square::B3);
        assert!(bb.is_empty());
    }
}
