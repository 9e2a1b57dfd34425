//! Clairvoyant reference search.
//!
//! Recurses through the *real* move path, cloning the session RNG so that
//! nature's placements are resolved with the true future draw sequence
//! instead of being enumerated adversarially. That makes it a cheat — it
//! knows exactly which tile will appear where — so it never drives
//! production play; it exists as a debugging oracle for the move plumbing.

use crate::board::{Board, Direction};
use crate::eval::Evaluator;
use crate::rng::Xorshift128;
use crate::search::SearchResult;
use crate::types::Score;

pub struct Oracle;

impl Oracle {
    pub fn new() -> Self {
        Oracle
    }

    pub fn search(
        &mut self,
        eval: Evaluator,
        board: &Board,
        rng: &Xorshift128,
        lookahead: u32,
    ) -> SearchResult {
        let mut ctx = Ctx { eval, nodes: 0 };
        let (score, best_move) = ctx.search_root(board, rng, lookahead);
        SearchResult {
            score,
            best_move,
            nodes: ctx.nodes,
            pruned: 0,
            cache_hits: 0,
        }
    }
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new()
    }
}

struct Ctx {
    eval: Evaluator,
    nodes: u64,
}

impl Ctx {
    fn search_root(
        &mut self,
        board: &Board,
        rng: &Xorshift128,
        lookahead: u32,
    ) -> (Score, Option<Direction>) {
        if lookahead == 0 {
            return ((self.eval)(board), None);
        }
        let mut best_score = Score::MIN;
        let mut best_move = None;
        for dir in Direction::ALL {
            let mut next = *board;
            let mut next_rng = *rng;
            if !next.apply_move(dir, &mut next_rng, None) {
                continue;
            }
            self.nodes += 1;
            let score = self.node(&next, &next_rng, lookahead - 1);
            if score > best_score {
                best_score = score;
                best_move = Some(dir);
            }
        }
        (best_score, best_move)
    }

    fn node(&mut self, board: &Board, rng: &Xorshift128, lookahead: u32) -> Score {
        if lookahead == 0 {
            return (self.eval)(board);
        }
        let mut best = Score::MIN;
        for dir in Direction::ALL {
            let mut next = *board;
            let mut next_rng = *rng;
            if !next.apply_move(dir, &mut next_rng, None) {
                continue;
            }
            self.nodes += 1;
            best = best.max(self.node(&next, &next_rng, lookahead - 1));
        }
        best
    }
}
