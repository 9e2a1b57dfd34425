//! Exhaustive minimax search.
//!
//! The reference implementation of the move/placement tree: no pruning, no
//! memoization. The other fair variants must return exactly its score and
//! move; it exists to keep them honest and to play at shallow depths.

use crate::board::{Board, Direction};
use crate::constants::NUM_CELLS;
use crate::eval::Evaluator;
use crate::search::{SPAWN_RANKS, SearchResult};
use crate::types::{Depth, Score};

pub struct Minimax;

impl Minimax {
    pub fn new() -> Self {
        Minimax
    }

    pub fn search(&mut self, eval: Evaluator, board: &Board, lookahead: u32) -> SearchResult {
        let mut ctx = Ctx { eval, nodes: 0 };
        let (score, best_move) = ctx.search_root(board, lookahead * 2);
        SearchResult {
            score,
            best_move,
            nodes: ctx.nodes,
            pruned: 0,
            cache_hits: 0,
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

struct Ctx {
    eval: Evaluator,
    nodes: u64,
}

impl Ctx {
    /// MAX half-ply at the root: identical to [`max_node`](Self::max_node)
    /// but remembers which direction achieved the best score. The first
    /// direction in canonical order wins ties.
    fn search_root(&mut self, board: &Board, depth: Depth) -> (Score, Option<Direction>) {
        if depth == 0 {
            return ((self.eval)(board), None);
        }
        let mut best_score = Score::MIN;
        let mut best_move = None;
        for dir in Direction::ALL {
            let mut next = *board;
            if !next.tilt(dir.dx(), dir.dy(), None) {
                continue;
            }
            self.nodes += 1;
            let score = self.min_node(&next, depth - 1);
            if score > best_score {
                best_score = score;
                best_move = Some(dir);
            }
        }
        (best_score, best_move)
    }

    fn max_node(&mut self, board: &Board, depth: Depth) -> Score {
        if depth == 0 {
            return (self.eval)(board);
        }
        let mut best = Score::MIN;
        for dir in Direction::ALL {
            let mut next = *board;
            if !next.tilt(dir.dx(), dir.dy(), None) {
                continue;
            }
            self.nodes += 1;
            best = best.max(self.min_node(&next, depth - 1));
        }
        best
    }

    /// MIN half-ply: nature places a tile on every empty cell at both spawn
    /// ranks and keeps the worst outcome for the player.
    fn min_node(&mut self, board: &Board, depth: Depth) -> Score {
        let mut best = Score::MAX;
        for cell in 0..NUM_CELLS {
            if board.cells[cell] != 0 {
                continue;
            }
            for rank in SPAWN_RANKS {
                let mut next = *board;
                next.cells[cell] = rank;
                best = best.min(self.max_node(&next, depth - 1));
            }
        }
        best
    }
}
