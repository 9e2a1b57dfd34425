//! Game session facade.
//!
//! Ties history, animation state and the searcher together behind the small
//! command surface the presentation layer consumes: move, undo, redo, new
//! game, hint and engine move. One session object per game; whoever hosts
//! the UI loop owns it.

use crate::anim::AnimState;
use crate::board::{Board, Direction};
use crate::eval::{Evaluator, evaluate_monotonicity};
use crate::history::BoardHistory;
use crate::level::{DEFAULT_LEVEL, get_level};
use crate::rng::Xorshift128;
use crate::search::{SearchResult, Searcher, Strategy};

/// An interactive game session with engine assistance.
pub struct Session {
    history: BoardHistory,
    anim: AnimState,
    searcher: Searcher,
    evaluator: Evaluator,
    lookahead: u32,
}

impl Session {
    /// Creates a session with the production configuration (caching
    /// alpha-beta at the default level) and starts the first game.
    pub fn new(seed: u32) -> Session {
        Session::with_config(seed, Strategy::CachingAlphaBeta, DEFAULT_LEVEL)
    }

    /// Creates a session with an explicit strategy and difficulty level,
    /// seeds the generator and places the two opening tiles.
    ///
    /// # Panics
    ///
    /// Panics if `level` is out of range.
    pub fn with_config(seed: u32, strategy: Strategy, level: usize) -> Session {
        let mut session = Session {
            history: BoardHistory::new(seed),
            anim: AnimState::new(),
            searcher: Searcher::new(strategy),
            evaluator: evaluate_monotonicity,
            lookahead: get_level(level).lookahead,
        };
        session.new_game();
        session
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.history.board()
    }

    /// The current generator state.
    pub fn rng(&self) -> &Xorshift128 {
        self.history.rng()
    }

    /// Events describing the most recent action, for the renderer.
    pub fn anim(&self) -> &AnimState {
        &self.anim
    }

    /// Undo/redo availability, for UI affordances.
    pub fn history(&self) -> &BoardHistory {
        &self.history
    }

    /// Whether no move can change the board any more.
    pub fn finished(&self) -> bool {
        self.board().finished()
    }

    /// Applies a player move. Returns whether the board changed; an
    /// unchanged board consumes nothing and commits nothing.
    pub fn apply(&mut self, dir: Direction) -> bool {
        self.anim.reset();
        self.history.apply(dir, &mut self.anim)
    }

    /// Steps back one move. No-op when nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.anim.reset();
        self.history.undo()
    }

    /// Steps forward one undone move. No-op when nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.anim.reset();
        self.history.redo()
    }

    /// Abandons the current game and starts a fresh one, carrying the RNG
    /// stream forward (the session remains a pure function of its seed).
    pub fn new_game(&mut self) {
        self.anim.reset();
        self.history.new_game(&mut self.anim);
    }

    /// Clears everything and reseeds; the only way to restart the stream.
    pub fn reseed(&mut self, seed: u32) {
        self.history.reset(seed);
        self.new_game();
    }

    /// Searches the current position without applying anything.
    pub fn hint(&mut self) -> SearchResult {
        self.searcher.search(
            self.evaluator,
            self.history.board(),
            self.history.rng(),
            self.lookahead,
        )
    }

    /// Searches the current position and applies the chosen move through
    /// the same path a manual command takes. `best_move` is `None` exactly
    /// when the game cannot continue.
    pub fn ai_move(&mut self) -> SearchResult {
        let result = self.hint();
        if let Some(dir) = result.best_move {
            self.apply(dir);
        }
        result
    }
}
