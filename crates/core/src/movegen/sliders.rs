//! Sliding piece (bishop, rook, queen) move generation.
//!
//! Pseudo-legal only: a move that leaves the mover's own king in check is
//! filtered out generically by [`super::generate_legal_moves`].

use crate::attacks::{bishop_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Push every pseudo-legal bishop, rook, and queen move for the side to move.
pub(super) fn gen_sliders(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let friendly = board.side(us);
    let occupied = board.occupied();

    gen_slider_type(board, list, friendly, occupied, PieceKind::Bishop, bishop_attacks);
    gen_slider_type(board, list, friendly, occupied, PieceKind::Rook, rook_attacks);
    gen_slider_type(board, list, friendly, occupied, PieceKind::Queen, |sq, occ| {
        rook_attacks(sq, occ) | bishop_attacks(sq, occ)
    });
}

fn gen_slider_type(
    board: &Board,
    list: &mut MoveList,
    friendly: Bitboard,
    occupied: Bitboard,
    kind: PieceKind,
    attacks_fn: impl Fn(Square, Bitboard) -> Bitboard,
) {
    let us = board.side_to_move();
    let mut pieces = board.pieces(kind) & board.side(us);

    while let Some((src, rest)) = pieces.pop_lsb() {
        pieces = rest;
        let mut targets = attacks_fn(src, occupied) & !friendly;
        while let Some((dst, rest2)) = targets.pop_lsb() {
            targets = rest2;
            list.push(Move::new(src, dst));
        }
    }
}
