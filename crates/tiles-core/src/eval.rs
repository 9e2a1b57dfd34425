//! Board evaluation heuristics.
//!
//! The searchers score leaf positions with a pure function of the board.
//! The production heuristic rewards monotone lines: boards whose rows and
//! columns run in one direction keep tiles mergeable and corners anchored.

use crate::board::Board;
use crate::constants::{GRID_COLS, GRID_ROWS, NUM_CELLS};
use crate::types::{Rank, Score};

/// A leaf evaluation function. Higher is better for the player.
pub type Evaluator = fn(&Board) -> Score;

/// Scores one line of `n` cells read from `begin` with the given stride.
///
/// Starts at `n - 2` and subtracts one point for every reversal in the sign
/// of consecutive deltas along the non-zero run. Leading zeros are skipped;
/// interior zeros neither reset the last value nor count as a delta.
fn line_monotonicity(cells: &[Rank; NUM_CELLS], begin: usize, stride: usize, n: usize) -> Score {
    let mut total = n as Score - 2;

    let mut i = 0;
    let mut at = begin;
    while i < n && cells[at] == 0 {
        at += stride;
        i += 1;
    }
    if i == n {
        return total;
    }

    let mut last_value = i32::from(cells[at]);
    let mut last_sign = 0;
    while i < n {
        let value = i32::from(cells[at]);
        if value != 0 {
            let delta = value - last_value;
            let sign = i32::from(delta > 0) - i32::from(delta < 0);
            if sign != 0 {
                if last_sign != 0 && last_sign != sign {
                    total -= 1;
                }
                last_sign = sign;
            }
            last_value = value;
        }
        i += 1;
        at += stride;
    }

    total
}

/// Sums the monotonicity measure over all 4 rows and all 4 columns.
///
/// A fully monotone board scores 16; every direction reversal in a row or
/// column costs one point. This is a heuristic ordering signal, not a
/// win/loss value: the game's only terminal condition is "no move changes
/// anything".
pub fn evaluate_monotonicity(board: &Board) -> Score {
    let mut total = 0;
    for row in 0..GRID_ROWS {
        total += line_monotonicity(&board.cells, row * GRID_COLS, 1, GRID_COLS);
    }
    for col in 0..GRID_COLS {
        total += line_monotonicity(&board.cells, col, GRID_COLS, GRID_ROWS);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(line: [Rank; 4]) -> Board {
        let mut b = Board::new();
        b.cells[0..4].copy_from_slice(&line);
        b
    }

    fn line_score(line: [Rank; 4]) -> Score {
        let b = row_board(line);
        line_monotonicity(&b.cells, 0, 1, 4)
    }

    #[test]
    fn test_line_monotonicity_cases() {
        // monotone runs keep the full base score
        assert_eq!(line_score([1, 2, 3, 4]), 2);
        assert_eq!(line_score([4, 3, 2, 1]), 2);
        assert_eq!(line_score([0, 0, 0, 0]), 2);
        assert_eq!(line_score([0, 0, 5, 3]), 2);
        // zeros do not reset the last value
        assert_eq!(line_score([1, 0, 2, 0]), 2);
        assert_eq!(line_score([2, 2, 1, 0]), 2);
        // each reversal costs one point
        assert_eq!(line_score([1, 3, 2, 4]), 0);
        assert_eq!(line_score([1, 2, 1, 0]), 1);
    }

    #[test]
    fn test_empty_board_scores_full_marks() {
        assert_eq!(evaluate_monotonicity(&Board::new()), 16);
    }

    #[test]
    fn test_staircase_board_is_fully_monotone() {
        let b = Board {
            cells: [
                1, 2, 3, 4, //
                2, 3, 4, 5, //
                3, 4, 5, 6, //
                4, 5, 6, 7,
            ],
        };
        assert_eq!(evaluate_monotonicity(&b), 16);
    }

    #[test]
    fn test_single_zigzag_row_costs_two() {
        let mut b = Board::new();
        b.cells[0..4].copy_from_slice(&[1, 3, 2, 4]);
        // the row loses its 2 points; columns are single-valued runs
        assert_eq!(evaluate_monotonicity(&b), 14);
    }
}
