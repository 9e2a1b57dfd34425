//! Alpha-beta search with a bound-typed transposition cache.
//!
//! Combining pruning with memoization needs one extra discipline: a score
//! computed under a closed window is only a bound on the true value, so each
//! entry records whether it is exact, a lower bound (the node failed high)
//! or an upper bound (the node failed low). A cached bound may only answer a
//! query whose window it already decides; anything else silently corrupts
//! the search, so the admission test below is load-bearing.

use crate::board::{Board, Direction};
use crate::cache::{Bound, BoardCache};
use crate::constants::NUM_CELLS;
use crate::eval::Evaluator;
use crate::search::{SPAWN_RANKS, SearchResult};
use crate::types::{Depth, Score};

#[derive(Debug, Clone, Copy, Default)]
struct Entry {
    depth: Depth,
    bound: Bound,
    score: Score,
}

pub struct CachingAlphaBeta {
    cache: BoardCache<Entry>,
}

impl CachingAlphaBeta {
    pub fn new() -> Self {
        CachingAlphaBeta {
            cache: BoardCache::new(),
        }
    }

    pub fn search(&mut self, eval: Evaluator, board: &Board, lookahead: u32) -> SearchResult {
        self.cache.reset();
        let mut ctx = Ctx {
            eval,
            cache: &mut self.cache,
            nodes: 0,
            pruned: 0,
            cache_hits: 0,
        };
        let (score, best_move) = ctx.search_root(board, lookahead * 2);
        SearchResult {
            score,
            best_move,
            nodes: ctx.nodes,
            pruned: ctx.pruned,
            cache_hits: ctx.cache_hits,
        }
    }
}

impl Default for CachingAlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}

struct Ctx<'a> {
    eval: Evaluator,
    cache: &'a mut BoardCache<Entry>,
    nodes: u64,
    pruned: u64,
    cache_hits: u64,
}

impl Ctx<'_> {
    /// Admission test for a cached entry against the current window.
    ///
    /// Usable iff the stored remaining depth matches exactly and the bound
    /// already decides the query: exact always, a lower bound only when it
    /// fails high against beta, an upper bound only when it fails low
    /// against alpha.
    fn probe(&mut self, key: u64, alpha: Score, beta: Score, depth: Depth) -> Option<Score> {
        let entry = self.cache.get(key)?;
        if entry.depth != depth {
            return None;
        }
        let usable = match entry.bound {
            Bound::Exact => true,
            Bound::Lower => entry.score >= beta,
            Bound::Upper => entry.score <= alpha,
            Bound::None => false,
        };
        if usable {
            let score = entry.score;
            self.cache_hits += 1;
            Some(score)
        } else {
            None
        }
    }

    fn search_root(&mut self, board: &Board, depth: Depth) -> (Score, Option<Direction>) {
        if depth == 0 {
            let score = (self.eval)(board);
            self.cache.put(
                board.pack(),
                Entry {
                    depth: 0,
                    bound: Bound::Exact,
                    score,
                },
            );
            return (score, None);
        }

        let mut alpha = Score::MIN;
        let beta = Score::MAX;
        let mut best_move = None;
        let mut bound = Bound::Upper;
        for dir in Direction::ALL {
            let mut next = *board;
            if !next.tilt(dir.dx(), dir.dy(), None) {
                continue;
            }
            self.nodes += 1;
            let score = self.min_node(&next, alpha, beta, depth - 1);
            if score > alpha {
                alpha = score;
                bound = Bound::Exact;
                best_move = Some(dir);
            }
            if alpha >= beta {
                self.pruned += 1;
                bound = Bound::Lower;
                break;
            }
        }
        self.cache.put(
            board.pack(),
            Entry {
                depth,
                bound,
                score: alpha,
            },
        );
        (alpha, best_move)
    }

    fn max_node(&mut self, board: &Board, mut alpha: Score, beta: Score, depth: Depth) -> Score {
        let key = board.pack();
        if let Some(score) = self.probe(key, alpha, beta, depth) {
            return score;
        }

        if depth == 0 {
            let score = (self.eval)(board);
            self.cache.put(
                key,
                Entry {
                    depth: 0,
                    bound: Bound::Exact,
                    score,
                },
            );
            return score;
        }

        // fails low unless a branch raises alpha
        let mut bound = Bound::Upper;
        for dir in Direction::ALL {
            let mut next = *board;
            if !next.tilt(dir.dx(), dir.dy(), None) {
                continue;
            }
            self.nodes += 1;
            let score = self.min_node(&next, alpha, beta, depth - 1);
            if score > alpha {
                alpha = score;
                bound = Bound::Exact;
            }
            if alpha >= beta {
                self.pruned += 1;
                bound = Bound::Lower;
                break;
            }
        }
        self.cache.put(
            key,
            Entry {
                depth,
                bound,
                score: alpha,
            },
        );
        alpha
    }

    fn min_node(&mut self, board: &Board, alpha: Score, mut beta: Score, depth: Depth) -> Score {
        let key = board.pack();
        if let Some(score) = self.probe(key, alpha, beta, depth) {
            return score;
        }

        // fails high unless a branch lowers beta
        let mut bound = Bound::Lower;
        'cells: for cell in 0..NUM_CELLS {
            if board.cells[cell] != 0 {
                continue;
            }
            for rank in SPAWN_RANKS {
                let mut next = *board;
                next.cells[cell] = rank;
                let score = self.max_node(&next, alpha, beta, depth - 1);
                if score < beta {
                    beta = score;
                    bound = Bound::Exact;
                }
                if alpha >= beta {
                    self.pruned += 1;
                    bound = Bound::Upper;
                    break 'cells;
                }
            }
        }
        self.cache.put(
            key,
            Entry {
                depth,
                bound,
                score: beta,
            },
        );
        beta
    }
}
