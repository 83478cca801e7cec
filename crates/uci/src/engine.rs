//! Single-threaded, synchronous UCI engine.

use std::io::{self, BufRead};

use tracing::{debug, warn};

use corvid_core::{perft, Board};
use corvid_engine::Searcher;

use crate::command::{parse_command, Command};
use crate::error::UciError;

/// The UCI engine, holding current board state and searcher.
///
/// Reads one line at a time from stdin and handles it to completion before
/// reading the next; there is no worker thread and no pondering. `stop` and
/// `ponderhit` are accepted but have no effect, since a `go` command always
/// runs its fixed-depth search to completion before the next line is read.
pub struct UciEngine {
    board: Board,
    searcher: Searcher,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            searcher: Searcher::new(),
        }
    }

    /// Run the UCI loop, reading from stdin until `quit` or input closes.
    pub fn run(mut self) -> Result<(), UciError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Uci) => self.handle_uci(),
                Ok(Command::IsReady) => self.handle_isready(),
                Ok(Command::UciNewGame) => self.handle_ucinewgame(),
                Ok(Command::Position(board)) => self.handle_position(board),
                Ok(Command::GoDepth { depth }) => self.handle_go_depth(depth),
                Ok(Command::GoPerft { depth }) => self.handle_go_perft(depth),
                Ok(Command::Stop) => {}
                Ok(Command::Quit) => break,
                Ok(Command::Unknown(_)) => {}
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
        }

        Ok(())
    }

    fn handle_uci(&self) {
        println!("id name corvid");
        println!("id author corvid contributors");
        println!("uciok");
    }

    fn handle_isready(&self) {
        println!("readyok");
    }

    fn handle_ucinewgame(&mut self) {
        self.board = Board::starting_position();
        self.searcher = Searcher::new();
    }

    fn handle_position(&mut self, board: Board) {
        self.board = board;
    }

    fn handle_go_depth(&mut self, depth: u8) {
        let result = self.searcher.search(&self.board, depth);
        if result.best_move.is_null() {
            println!("bestmove 0000");
        } else {
            println!("bestmove {}", result.best_move.to_uci());
        }
    }

    fn handle_go_perft(&mut self, depth: u8) {
        let mut board = self.board;
        let nodes = perft(&mut board, depth as usize);
        println!("nodes {nodes}");
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_depth_prints_a_legal_bestmove() {
        let mut engine = UciEngine::new();
        engine.handle_go_depth(1);
    }

    #[test]
    fn ucinewgame_resets_board_to_starting_position() {
        let mut engine = UciEngine::new();
        let e4: Board = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
            .parse()
            .unwrap();
        engine.handle_position(e4);
        engine.handle_ucinewgame();
        assert_eq!(engine.board, Board::starting_position());
    }

    #[test]
    fn go_perft_does_not_mutate_engine_board() {
        let mut engine = UciEngine::new();
        let before = engine.board;
        engine.handle_go_perft(2);
        assert_eq!(engine.board, before);
    }
}
