//! Minimax with a transposition cache.
//!
//! Identical tree to [`super::minimax`], but every node result is memoized
//! keyed by packed board state. Different move orders reach the same board
//! at the same remaining depth often enough that the cache collapses large
//! parts of the tree. A hit is honoured only when the stored remaining depth
//! equals the query depth exactly: a shallower result answers a different
//! question, and depth is not part of the key.

use crate::board::{Board, Direction};
use crate::cache::BoardCache;
use crate::constants::NUM_CELLS;
use crate::eval::Evaluator;
use crate::search::{SPAWN_RANKS, SearchResult};
use crate::types::{Depth, Score};

#[derive(Debug, Clone, Copy, Default)]
struct Entry {
    depth: Depth,
    score: Score,
}

pub struct CachingMinimax {
    cache: BoardCache<Entry>,
}

impl CachingMinimax {
    pub fn new() -> Self {
        CachingMinimax {
            cache: BoardCache::new(),
        }
    }

    pub fn search(&mut self, eval: Evaluator, board: &Board, lookahead: u32) -> SearchResult {
        self.cache.reset();
        let mut ctx = Ctx {
            eval,
            cache: &mut self.cache,
            nodes: 0,
            cache_hits: 0,
        };
        let (score, best_move) = ctx.search_root(board, lookahead * 2);
        SearchResult {
            score,
            best_move,
            nodes: ctx.nodes,
            pruned: 0,
            cache_hits: ctx.cache_hits,
        }
    }
}

impl Default for CachingMinimax {
    fn default() -> Self {
        Self::new()
    }
}

struct Ctx<'a> {
    eval: Evaluator,
    cache: &'a mut BoardCache<Entry>,
    nodes: u64,
    cache_hits: u64,
}

impl Ctx<'_> {
    /// Root MAX half-ply; the cache was just cleared, so the root itself
    /// cannot hit, but its result is stored like any other node's.
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
            let score = self.node(&next, depth - 1);
            if score > best_score {
                best_score = score;
                best_move = Some(dir);
            }
        }
        self.cache.put(
            board.pack(),
            Entry {
                depth,
                score: best_score,
            },
        );
        (best_score, best_move)
    }

    fn node(&mut self, board: &Board, depth: Depth) -> Score {
        let key = board.pack();
        if let Some(entry) = self.cache.get(key)
            && entry.depth == depth
        {
            self.cache_hits += 1;
            return entry.score;
        }

        let best = if depth == 0 {
            (self.eval)(board)
        } else if depth % 2 == 1 {
            // MIN half-ply: tiles can only appear in empty cells
            let mut best = Score::MAX;
            for cell in 0..NUM_CELLS {
                if board.cells[cell] != 0 {
                    continue;
                }
                for rank in SPAWN_RANKS {
                    let mut next = *board;
                    next.cells[cell] = rank;
                    best = best.min(self.node(&next, depth - 1));
                }
            }
            best
        } else {
            let mut best = Score::MIN;
            for dir in Direction::ALL {
                let mut next = *board;
                if !next.tilt(dir.dx(), dir.dy(), None) {
                    continue;
                }
                self.nodes += 1;
                best = best.max(self.node(&next, depth - 1));
            }
            best
        };

        self.cache.put(key, Entry { depth, score: best });
        best
    }
}
