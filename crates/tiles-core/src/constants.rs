//! Global constants

/// Number of columns in the grid.
pub const GRID_COLS: usize = 4;

/// Number of rows in the grid.
pub const GRID_ROWS: usize = 4;

/// Number of cells on the board.
pub const NUM_CELLS: usize = GRID_COLS * GRID_ROWS;

/// Largest representable tile rank (packing uses 4 bits per cell).
pub const MAX_RANK: u8 = 15;
