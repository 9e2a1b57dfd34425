//! Difficulty levels and search depth configuration.

/// A difficulty preset: how many full player turns the engine looks ahead
/// when choosing a move. Deeper levels play stronger and slower; the
/// branching factor is roughly 4 x (free cells x 2) per full turn, so each
/// extra level multiplies work substantially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// Search lookahead in full player turns.
    pub lookahead: u32,
}

/// Pre-configured difficulty levels from 0 (instant, greedy) upward.
const LEVELS: [Level; 8] = [
    Level { lookahead: 1 },
    Level { lookahead: 2 },
    Level { lookahead: 3 },
    Level { lookahead: 4 },
    Level { lookahead: 5 },
    Level { lookahead: 6 },
    Level { lookahead: 7 },
    Level { lookahead: 8 },
];

/// The default level for autoplay.
pub const DEFAULT_LEVEL: usize = 4;

/// Retrieves the configuration for a difficulty level.
///
/// # Panics
///
/// Panics if `lv` is outside the configured range.
pub fn get_level(lv: usize) -> Level {
    if lv >= LEVELS.len() {
        panic!(
            "Invalid level: {}. Valid range is 0 to {}",
            lv,
            LEVELS.len() - 1
        );
    }
    LEVELS[lv]
}

/// Number of configured levels.
pub fn level_count() -> usize {
    LEVELS.len()
}
