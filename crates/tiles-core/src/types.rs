//! Common type aliases used throughout the engine.

/// Remaining search depth in half-plies (a player tilt or a tile placement).
pub type Depth = u32;

/// Heuristic board score. Higher is better for the player.
pub type Score = i32;

/// Tile rank; the displayed tile value is `2^rank`, 0 meaning empty.
pub type Rank = u8;

/// Packed 64-bit board encoding: 4 bits per cell in row-major order, cell 0
/// in the most significant nibble. Total and injective over boards whose
/// ranks never exceed [`crate::constants::MAX_RANK`].
pub type BoardKey = u64;
