//! Knight move generation.
//!
//! Pseudo-legal only: a move that leaves the mover's own king in check is
//! filtered out generically by [`super::generate_legal_moves`].

use crate::attacks::knight_attacks;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;

use super::MoveList;

/// Push every pseudo-legal knight move for the side to move.
pub(super) fn gen_knights(board: &Board, list: &mut MoveList) {
    let us = board.side_to_move();
    let friendly = board.side(us);
    let mut knights = board.pieces(PieceKind::Knight) & friendly;

    while let Some((src, rest)) = knights.pop_lsb() {
        knights = rest;
        let mut targets = knight_attacks(src) & !friendly;
        while let Some((dst, rest2)) = targets.pop_lsb() {
            targets = rest2;
            list.push(Move::new(src, dst));
        }
    }
}
