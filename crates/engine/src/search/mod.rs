//! Search algorithms and move ordering.

pub mod heuristics;
pub mod negamax;
pub mod ordering;

use tracing::{debug, trace};

use corvid_core::{apply_move, generate_legal_moves, unmake_move, Board, Move};

use heuristics::{HistoryTable, KillerTable};
use negamax::{minimax, INF};
use ordering::{order_moves, score_move};

/// Result of a fixed-depth root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found at the root, or [`Move::NULL`] if none exists.
    pub best_move: Move,
    /// Evaluation score in centipawns from the side to move's perspective.
    pub score: i32,
}

/// Fixed-depth negamax searcher.
///
/// Owns the killer and history tables used to order moves; both are reset
/// to zero at the start of every [`Searcher::search`] call, matching the
/// process-wide-but-resettable lifecycle these tables are specified to have.
#[derive(Default)]
pub struct Searcher {
    killers: KillerTable,
    history: HistoryTable,
}

impl Searcher {
    /// Create a fresh searcher with empty killer and history tables.
    pub fn new() -> Self {
        Self {
            killers: KillerTable::new(),
            history: HistoryTable::new(),
        }
    }

    /// Search `board` to exactly `depth` plies and return the best root move.
    ///
    /// Resets the killer and history tables, generates legal root moves,
    /// orders them, and for each applies/evaluates/unmakes, tracking the
    /// maximum score with a first-seen tie-break. Returns a null move with
    /// score 0 if the position has no legal moves.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        debug!(depth, "search entry");
        self.killers.clear();
        self.history.clear();

        let mut scratch = *board;
        let generated = generate_legal_moves(&scratch);
        if generated.is_empty() {
            debug!("search exit: no legal moves");
            return SearchResult { best_move: Move::NULL, score: 0 };
        }

        let mut moves: Vec<Move> = generated.as_slice().to_vec();
        order_moves(&scratch, &mut moves, 0, &self.killers, &self.history);

        let mut best_move = moves[0];
        let mut best_score = -INF;

        for mv in moves {
            let is_quiet = scratch.piece_on(mv.to).is_none();

            let undo = apply_move(&mut scratch, mv).expect("legally generated move must have an occupied source square");
            let score = if depth == 0 {
                -minimax(&mut scratch, 0, -INF, INF, 1, &mut self.killers, &mut self.history)
            } else {
                -minimax(&mut scratch, depth - 1, -INF, INF, 1, &mut self.killers, &mut self.history)
            };
            unmake_move(&mut scratch, mv, &undo);

            if score > best_score {
                best_score = score;
                best_move = mv;
                if is_quiet {
                    self.history.update(mv.from, mv.to, depth.max(1));
                }
            }
            trace!(mv = %mv.to_uci(), score, "root move evaluated");
        }

        debug!(best_move = %best_move.to_uci(), score = best_score, "search exit");
        SearchResult { best_move, score: best_score }
    }
}

/// Score a single move the way root ordering would, exposed for diagnostics.
#[allow(dead_code)]
fn root_move_score(board: &Board, mv: Move, killers: &KillerTable, history: &HistoryTable) -> i32 {
    score_move(board, mv, 0, killers, history)
}
