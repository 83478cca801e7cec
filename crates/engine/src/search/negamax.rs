//! Fixed-depth negamax search: fail-hard alpha-beta with a fail-soft
//! quiescence extension.

use corvid_core::{apply_move, generate_legal_moves, unmake_move, Board, Move};

use crate::evaluate;
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::ordering::{order_captures, order_moves, score_capture};

/// Root search window bound. Far above any realistic evaluation, but well
/// clear of 32-bit overflow when negated.
pub const INF: i32 = 10_000_000;

/// Base magnitude of a forced-mate score; the actual score returned is
/// `-(MATE_BASE + depth)`, so shallower mates score higher (closer to 0) in
/// magnitude than deep ones -- the search prefers the shortest mate.
const MATE_BASE: i32 = 100_000;

/// Scores at or beyond this magnitude indicate a forced mate.
pub const MATE_THRESHOLD: i32 = MATE_BASE;

/// Alpha-beta negamax over legal moves, bottoming out in [`quiescence`] at
/// `depth == 0`.
///
/// `ply` is the distance from the root; it indexes the killer table, which is
/// per-ply rather than per-node.
pub(super) fn minimax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: usize,
    killers: &mut KillerTable,
    history: &mut HistoryTable,
) -> i32 {
    if depth == 0 {
        return quiescence(board, alpha, beta);
    }

    let generated = generate_legal_moves(board);
    if generated.is_empty() {
        let us = board.side_to_move();
        let in_check = match board.try_king_square(us) {
            Some(king_sq) => board.is_square_attacked(king_sq, us.flip()),
            None => false,
        };
        return if in_check { -(MATE_BASE + depth as i32) } else { 0 };
    }

    let mut moves: Vec<Move> = generated.as_slice().to_vec();
    order_moves(board, &mut moves, ply, killers, history);

    for mv in moves {
        let is_quiet = board.piece_on(mv.to).is_none();

        let undo = apply_move(board, mv).expect("legally generated move must have an occupied source square");
        let score = -minimax(board, depth - 1, -beta, -alpha, ply + 1, killers, history);
        unmake_move(board, mv, &undo);

        if score >= beta {
            if is_quiet {
                killers.store(ply, mv);
                history.update(mv.from, mv.to, depth);
            }
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Quiescence search: extend capture sequences until the position is quiet,
/// avoiding the horizon effect of cutting a search off mid-exchange.
///
/// Fail-soft: unlike [`minimax`]'s `return beta`, this returns the best score
/// actually found (`standPat`), which may exceed `beta` without being clamped
/// to it. That asymmetry between the two functions is deliberate.
pub(super) fn quiescence(board: &mut Board, mut alpha: i32, beta: i32) -> i32 {
    let mut stand_pat = evaluate(board);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let generated = generate_legal_moves(board);
    let mut captures: Vec<Move> = generated
        .as_slice()
        .iter()
        .copied()
        .filter(|mv| board.piece_on(mv.to).is_some())
        .collect();
    order_captures(board, &mut captures);

    for mv in captures {
        let undo = apply_move(board, mv).expect("legally generated move must have an occupied source square");
        let score = -quiescence(board, -beta, -alpha);
        unmake_move(board, mv, &undo);

        if score >= beta {
            return score;
        }
        if score > alpha {
            alpha = score;
        }
        if score > stand_pat {
            stand_pat = score;
        }
    }

    stand_pat
}

#[cfg(test)]
mod tests {
    use super::*;
    use corvid_core::Board;

    fn search(board: &Board, depth: u8) -> i32 {
        let mut board = *board;
        let mut killers = KillerTable::new();
        let mut history = HistoryTable::new();
        minimax(&mut board, depth, -INF, INF, 1, &mut killers, &mut history)
    }

    #[test]
    fn depth_zero_matches_quiescence() {
        let board = Board::starting_position();
        let mut a = board;
        let mut b = board;
        let via_minimax = minimax(&mut a, 0, -INF, INF, 1, &mut KillerTable::new(), &mut HistoryTable::new());
        let via_quiescence = quiescence(&mut b, -INF, INF);
        assert_eq!(via_minimax, via_quiescence);
    }

    #[test]
    fn stalemate_scores_zero() {
        let board: Board = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(search(&board, 1), 0);
    }

    #[test]
    fn checkmate_scores_mate() {
        let board: Board = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        let score = search(&board, 1);
        assert!(score <= -MATE_THRESHOLD, "mated score {score} should indicate mate");
    }

    #[test]
    fn finds_mate_in_one() {
        let board: Board = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"
            .parse()
            .unwrap();
        let mut b = board;
        let mut killers = KillerTable::new();
        let mut history = HistoryTable::new();

        let mut best_move = Move::NULL;
        let mut best_score = -INF;
        let moves = generate_legal_moves(&b);
        for &mv in moves.as_slice() {
            let undo = apply_move(&mut b, mv).expect("legally generated move must have an occupied source square");
            let score = -minimax(&mut b, 1, -INF, INF, 1, &mut killers, &mut history);
            unmake_move(&mut b, mv, &undo);
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        assert_eq!(best_move.to_uci(), "h5f7");
        assert!(best_score > MATE_THRESHOLD);
    }

    #[test]
    fn quiescence_does_not_descend_into_quiet_positions() {
        let board = Board::starting_position();
        let mut b = board;
        let score = quiescence(&mut b, -INF, INF);
        // No captures available from startpos; quiescence should just return
        // the static evaluation.
        assert_eq!(score, evaluate(&board));
    }

    #[test]
    fn search_startpos_returns_bounded_score() {
        let board = Board::starting_position();
        let score = search(&board, 3);
        assert!(score.abs() < MATE_THRESHOLD);
    }
}
