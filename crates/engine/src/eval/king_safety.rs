//! King safety evaluation: back-rank positioning plus pawn shield coverage.
//!
//! Middlegame only -- a centralized king is rewarded separately by the
//! endgame king PST, so there is no endgame term here.

use corvid_core::{Bitboard, Board, Color, PieceKind, Square};

use crate::eval::score::{Score, S};

/// Bonus for keeping the king on its own back two ranks.
const BACK_RANK_BONUS: Score = S(10, 0);

/// Penalty for a king that has left its own back two ranks.
const EXPOSED_KING_PENALTY: Score = S(-5, 0);

/// Bonus per friendly pawn occupying one of the three shield squares one
/// rank ahead of the king.
const SHIELD_PAWN_BONUS: Score = S(5, 0);

/// Penalty applied when a side has no king on the board.
const MISSING_KING_PENALTY: Score = S(-200, 0);

/// Compute the pawn shield mask for a king on the given square.
///
/// The shield consists of the 2-3 squares directly in front of the king
/// (one rank forward from the king's perspective). For kings on edge files,
/// this is 2 squares; otherwise 3.
fn shield_mask(king_sq: Square, color: Color) -> Bitboard {
    let king_bb = king_sq.bitboard();

    let shifted = match color {
        Color::White => king_bb << 8,
        Color::Black => king_bb >> 8,
    };

    if shifted.is_empty() {
        return Bitboard::EMPTY;
    }

    shifted | ((shifted << 1) & !Bitboard::FILE_A) | ((shifted >> 1) & !Bitboard::FILE_H)
}

/// Evaluate king safety for one side, from that side's own perspective.
fn evaluate_king_safety_for_side(board: &Board, color: Color) -> Score {
    let king_sq = match board.try_king_square(color) {
        Some(sq) => sq,
        None => return MISSING_KING_PENALTY,
    };

    let on_back_ranks = match color {
        Color::White => king_sq.rank().index() <= 1,
        Color::Black => king_sq.rank().index() >= 6,
    };
    let mut score = if on_back_ranks { BACK_RANK_BONUS } else { EXPOSED_KING_PENALTY };

    let friendly_pawns = board.pieces(PieceKind::Pawn) & board.side(color);
    let shield_pawns = shield_mask(king_sq, color) & friendly_pawns;
    score += SHIELD_PAWN_BONUS * shield_pawns.count() as i16;

    score
}

/// Evaluate king safety from White's perspective: `white - black`.
pub fn evaluate_king_safety(board: &Board) -> Score {
    evaluate_king_safety_for_side(board, Color::White) - evaluate_king_safety_for_side(board, Color::Black)
}
