//! Game tree search engine.
//!
//! Move selection explores a two-player tree: MAX half-plies are the four
//! possible tilts (no-ops skipped) and MIN half-plies are nature's response,
//! enumerated exhaustively as every empty cell times both possible spawn
//! ranks. The requested lookahead counts full player turns and is doubled
//! internally into alternating half-plies.

pub mod alpha_beta;
pub mod caching_alpha_beta;
pub mod caching_minimax;
pub mod minimax;
pub mod oracle;

use crate::board::{Board, Direction};
use crate::eval::Evaluator;
use crate::rng::Xorshift128;
use crate::types::Score;

/// Which search algorithm drives move selection.
///
/// All minimax-family variants agree on the returned score and move for any
/// position and lookahead; they differ only in how much of the tree they
/// visit. [`Strategy::Oracle`] is the exception: it resolves nature's
/// randomness with the real RNG sequence instead of enumerating it, which
/// makes it a debugging reference, not a fair player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Oracle,
    Minimax,
    AlphaBeta,
    CachingMinimax,
    CachingAlphaBeta,
}

/// Result of one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score of the best line found.
    pub score: Score,
    /// First move of that line; `None` when no tilt changes the board.
    pub best_move: Option<Direction>,
    /// Player moves explored (diagnostic).
    pub nodes: u64,
    /// Alpha-beta cutoffs taken (diagnostic; zero for unpruned variants).
    pub pruned: u64,
    /// Transposition cache hits (diagnostic; zero for uncached variants).
    pub cache_hits: u64,
}

/// A move-selection engine with a fixed strategy.
///
/// The caching variants own their transposition cache across calls, but the
/// cache is cleared at the start of every [`search`](Searcher::search):
/// entries are scoped to one root's depth numbering and never reused across
/// root positions.
pub enum Searcher {
    Oracle(oracle::Oracle),
    Minimax(minimax::Minimax),
    AlphaBeta(alpha_beta::AlphaBeta),
    CachingMinimax(caching_minimax::CachingMinimax),
    CachingAlphaBeta(caching_alpha_beta::CachingAlphaBeta),
}

impl Searcher {
    /// Creates a searcher for the given strategy, allocating its cache when
    /// the strategy uses one.
    pub fn new(strategy: Strategy) -> Searcher {
        match strategy {
            Strategy::Oracle => Searcher::Oracle(oracle::Oracle::new()),
            Strategy::Minimax => Searcher::Minimax(minimax::Minimax::new()),
            Strategy::AlphaBeta => Searcher::AlphaBeta(alpha_beta::AlphaBeta::new()),
            Strategy::CachingMinimax => {
                Searcher::CachingMinimax(caching_minimax::CachingMinimax::new())
            }
            Strategy::CachingAlphaBeta => {
                Searcher::CachingAlphaBeta(caching_alpha_beta::CachingAlphaBeta::new())
            }
        }
    }

    /// The strategy this searcher was built with.
    pub fn strategy(&self) -> Strategy {
        match self {
            Searcher::Oracle(_) => Strategy::Oracle,
            Searcher::Minimax(_) => Strategy::Minimax,
            Searcher::AlphaBeta(_) => Strategy::AlphaBeta,
            Searcher::CachingMinimax(_) => Strategy::CachingMinimax,
            Searcher::CachingAlphaBeta(_) => Strategy::CachingAlphaBeta,
        }
    }

    /// Selects a move by searching `lookahead` full player turns ahead.
    ///
    /// Blocks until the (possibly pruned) tree has been explored; depth is
    /// the only latency knob. `lookahead == 0` returns the static evaluation
    /// with no move. The RNG is read only by the oracle strategy; the fair
    /// variants treat tile placement as an enumerated adversary.
    pub fn search(
        &mut self,
        eval: Evaluator,
        board: &Board,
        rng: &Xorshift128,
        lookahead: u32,
    ) -> SearchResult {
        match self {
            Searcher::Oracle(s) => s.search(eval, board, rng, lookahead),
            Searcher::Minimax(s) => s.search(eval, board, lookahead),
            Searcher::AlphaBeta(s) => s.search(eval, board, lookahead),
            Searcher::CachingMinimax(s) => s.search(eval, board, lookahead),
            Searcher::CachingAlphaBeta(s) => s.search(eval, board, lookahead),
        }
    }
}

/// Spawn ranks nature may place, in enumeration order.
pub(crate) const SPAWN_RANKS: [u8; 2] = [1, 2];
