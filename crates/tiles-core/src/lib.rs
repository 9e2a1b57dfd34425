//! Decision engine for a 4x4 sliding-tile merge puzzle.
//!
//! The engine is fully deterministic: given a 32-bit seed, the sequence of
//! board states produced by a sequence of move commands is reproducible
//! bit-for-bit. Move selection looks ahead through the two-player game tree
//! in which the maximising player tilts the grid and the minimising player
//! (nature) places a new tile on any empty cell, using a transposition cache
//! and alpha-beta pruning to keep the search tractable.

pub mod anim;
pub mod board;
pub mod cache;
pub mod constants;
pub mod eval;
pub mod history;
pub mod level;
pub mod rng;
pub mod search;
pub mod session;
pub mod types;
