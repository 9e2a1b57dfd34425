//! Undo/redo history over board and RNG snapshots.
//!
//! Every successful move commits a full `(Board, Xorshift128)` snapshot into
//! a fixed-capacity ring, so undo restores not only the tiles but the exact
//! generator state — replaying the same move after an undo produces the same
//! tile placement.

use crate::anim::AnimState;
use crate::board::{Board, Direction};
use crate::rng::Xorshift128;

/// Ring capacity in snapshots.
pub const MAX_UNDO: usize = 4096;

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    rng: Xorshift128,
}

/// Circular buffer of game snapshots with undo/redo cursors.
///
/// Invariant: `undo_avail + redo_avail + 1 <= MAX_UNDO` — the live span of
/// the ring can never wrap onto itself, so an undo always lands on a
/// snapshot this game actually produced.
pub struct BoardHistory {
    snapshots: Box<[Snapshot]>,
    current: usize,
    undo_avail: usize,
    redo_avail: usize,
}

impl BoardHistory {
    /// Creates a history seeded with `seed`, holding an empty board.
    pub fn new(seed: u32) -> Self {
        let blank = Snapshot {
            board: Board::new(),
            rng: Xorshift128::new(0),
        };
        let mut history = BoardHistory {
            snapshots: vec![blank; MAX_UNDO].into_boxed_slice(),
            current: 0,
            undo_avail: 0,
            redo_avail: 0,
        };
        history.reset(seed);
        history
    }

    /// Drops all undo/redo state and blanks the board, carrying the current
    /// RNG state forward into the new timeline.
    fn clear_history(&mut self) {
        self.snapshots[0].rng = self.snapshots[self.current].rng;
        self.current = 0;
        self.undo_avail = 0;
        self.redo_avail = 0;
        self.snapshots[0].board = Board::new();
    }

    /// Clears the history and reseeds the generator.
    pub fn reset(&mut self, seed: u32) {
        self.clear_history();
        self.snapshots[0].rng.reset(seed);
    }

    /// Clears the history and installs an explicit starting position,
    /// typically a recorded replay state.
    pub fn reset_from(&mut self, board: Board, rng: Xorshift128) {
        self.clear_history();
        self.snapshots[0] = Snapshot { board, rng };
    }

    /// Starts a new game: clears the history (retaining RNG continuity) and
    /// places the two opening tiles.
    pub fn new_game(&mut self, anim: &mut AnimState) {
        self.clear_history();
        let slot = &mut self.snapshots[0];
        slot.board.place(2, &mut slot.rng, Some(anim));
    }

    /// The current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.snapshots[self.current].board
    }

    /// The current generator state.
    #[inline]
    pub fn rng(&self) -> &Xorshift128 {
        &self.snapshots[self.current].rng
    }

    /// Undo steps currently available.
    pub fn undo_available(&self) -> usize {
        self.undo_avail
    }

    /// Redo steps currently available.
    pub fn redo_available(&self) -> usize {
        self.redo_avail
    }

    /// Applies a move against the current snapshot and, if it changed the
    /// board, commits the successor state. A committing move discards every
    /// available redo. Returns whether the board changed.
    pub fn apply(&mut self, dir: Direction, anim: &mut AnimState) -> bool {
        let mut next = self.snapshots[self.current];
        let moved = next.board.apply_move(dir, &mut next.rng, Some(anim));

        if moved {
            self.current = (self.current + 1) % MAX_UNDO;
            self.snapshots[self.current] = next;
            if self.undo_avail < MAX_UNDO - 1 {
                self.undo_avail += 1;
            }
            self.redo_avail = 0;
        }
        moved
    }

    /// Steps back one snapshot; a no-op returning `false` when nothing is
    /// left to undo.
    pub fn undo(&mut self) -> bool {
        if self.undo_avail == 0 {
            return false;
        }
        self.undo_avail -= 1;
        self.redo_avail += 1;
        self.current = (self.current + MAX_UNDO - 1) % MAX_UNDO;
        true
    }

    /// Steps forward one snapshot; a no-op returning `false` when nothing is
    /// left to redo.
    pub fn redo(&mut self) -> bool {
        if self.redo_avail == 0 {
            return false;
        }
        self.redo_avail -= 1;
        self.undo_avail += 1;
        self.current = (self.current + 1) % MAX_UNDO;
        true
    }
}
