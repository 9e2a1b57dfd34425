//! Per-move animation events.
//!
//! A transient record of what a single move changed, consumed by the
//! presentation layer to interpolate tile motion. The events carry no
//! authority over game logic: search and history never read them.

use arrayvec::ArrayVec;

use crate::constants::NUM_CELLS;
use crate::types::Rank;

/// Upper bound on events produced by one move.
pub const MAX_EVENTS: usize = NUM_CELLS * 2;

/// One visual change caused by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    /// A tile travelled from `from` to `to` (possibly `from == to`).
    Slide { from: u8, to: u8, rank: Rank },
    /// Two tiles of `rank` met at `to`; the merged tile has rank `rank + 1`.
    Merge {
        from_a: u8,
        from_b: u8,
        to: u8,
        rank: Rank,
    },
    /// A freshly placed tile appeared at `at`.
    Spawn { at: u8, rank: Rank },
}

/// Event list for the most recent move.
#[derive(Debug, Clone, Default)]
pub struct AnimState {
    events: ArrayVec<TileEvent, MAX_EVENTS>,
    moved: bool,
}

impl AnimState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all events and clears the change flag.
    pub fn reset(&mut self) {
        self.events.clear();
        self.moved = false;
    }

    /// Events recorded since the last [`reset`](Self::reset), in the order
    /// the transition produced them.
    pub fn events(&self) -> &[TileEvent] {
        &self.events
    }

    /// Whether the recorded move changed anything on the board.
    pub fn tiles_changed(&self) -> bool {
        self.moved
    }

    pub(crate) fn slide(&mut self, from: u8, to: u8, rank: Rank) {
        self.events.push(TileEvent::Slide { from, to, rank });
        if from != to {
            self.moved = true;
        }
    }

    pub(crate) fn merge(&mut self, from_a: u8, from_b: u8, to: u8, rank: Rank) {
        self.events.push(TileEvent::Merge {
            from_a,
            from_b,
            to,
            rank,
        });
        self.moved = true;
    }

    pub(crate) fn spawn(&mut self, at: u8, rank: Rank) {
        self.events.push(TileEvent::Spawn { at, rank });
        self.moved = true;
    }
}
