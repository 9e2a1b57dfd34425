//! 4x4 tile grid and the tilt/merge transition kernel.

use std::fmt;

use arrayvec::ArrayVec;

use crate::anim::AnimState;
use crate::constants::{GRID_COLS, GRID_ROWS, MAX_RANK, NUM_CELLS};
use crate::rng::Xorshift128;
use crate::types::{BoardKey, Rank};

/// A move command: the edge toward which every tile is pushed.
///
/// The discriminant order is the canonical enumeration order used by the
/// searchers; it decides the tie-break when several directions score
/// equally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Horizontal component of the push, in {-1, 0, 1}.
    #[inline]
    pub const fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }

    /// Vertical component of the push, in {-1, 0, 1}.
    #[inline]
    pub const fn dy(self) -> i32 {
        match self {
            Direction::Left | Direction::Right => 0,
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }

    /// Canonical index of the direction, 0..4.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// The 4x4 grid of tile ranks, row-major.
///
/// A cell holds 0 when empty, otherwise a rank `r` in `1..=15` representing
/// the tile value `2^r`. The bound makes every board packable into a 64-bit
/// key at 4 bits per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    pub cells: [Rank; NUM_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Builds a board from a packed 64-bit key.
    pub fn from_key(key: BoardKey) -> Board {
        let mut cells = [0; NUM_CELLS];
        let mut k = key;
        for i in (0..NUM_CELLS).rev() {
            cells[i] = (k & 0x0F) as Rank;
            k >>= 4;
        }
        Board { cells }
    }

    /// Packs the board into its 64-bit key: 4 bits per cell, row-major,
    /// cell 0 in the most significant nibble. Injective over valid boards.
    #[inline]
    pub fn pack(&self) -> BoardKey {
        let mut k: BoardKey = 0;
        for &cell in &self.cells {
            debug_assert!(cell <= MAX_RANK);
            k = (k << 4) | BoardKey::from(cell);
        }
        k
    }

    /// Number of empty cells.
    #[inline]
    pub fn count_free(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 0).count()
    }

    /// Indices of empty cells in row-major order.
    ///
    /// The ordering is load-bearing: sequential tile placement draws an
    /// index into this list and removes the chosen slot by shifting later
    /// entries down, so the list must always be in a canonical order for
    /// the draw sequence to be reproducible.
    pub fn free_cells(&self) -> ArrayVec<u8, NUM_CELLS> {
        let mut free = ArrayVec::new();
        for (i, &cell) in self.cells.iter().enumerate() {
            if cell == 0 {
                free.push(i as u8);
            }
        }
        free
    }

    /// Whether any horizontally or vertically adjacent pair of cells holds
    /// equal non-zero ranks.
    pub fn has_direct_matches(&self) -> bool {
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS - 1 {
                let at = row * GRID_COLS + col;
                if self.cells[at] != 0 && self.cells[at] == self.cells[at + 1] {
                    return true;
                }
            }
        }
        for col in 0..GRID_COLS {
            for row in 0..GRID_ROWS - 1 {
                let at = row * GRID_COLS + col;
                if self.cells[at] != 0 && self.cells[at] == self.cells[at + GRID_COLS] {
                    return true;
                }
            }
        }
        false
    }

    /// Terminal-state test: the board is full and no move can change it.
    #[inline]
    pub fn finished(&self) -> bool {
        self.count_free() == 0 && !self.has_direct_matches()
    }

    /// Highest rank present on the board.
    pub fn highest_rank(&self) -> Rank {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Inserts up to `count` new tiles into empty cells.
    ///
    /// Each tile is rank 1 with probability 0.9 and rank 2 with probability
    /// 0.1, drawn via `next_n(10)`; the slot is a uniform draw into the
    /// current free list. The chosen slot is removed by shifting all later
    /// entries down rather than swapping with the last, so placing N tiles
    /// one at a time walks the same free-list evolution as placing them in
    /// one call. Stops early when no free cell remains.
    pub fn place(&mut self, count: usize, rng: &mut Xorshift128, mut anim: Option<&mut AnimState>) {
        let mut free = self.free_cells();
        let mut remaining = count;
        while remaining > 0 && !free.is_empty() {
            let rank: Rank = if rng.next_n(10) < 9 { 1 } else { 2 };
            let which = rng.next_n(free.len() as u32) as usize;
            let cell = free[which];
            self.cells[usize::from(cell)] = rank;
            if let Some(anim) = anim.as_deref_mut() {
                anim.spawn(cell, rank);
            }
            free.remove(which);
            remaining -= 1;
        }
    }

    /// Compacts and merges every line of the grid toward the edge given by
    /// the direction vector; exactly one of `dx`, `dy` must be non-zero.
    ///
    /// Each line is scanned from the destination edge outward while a
    /// carried value waits for its write position: an equal cell merges with
    /// the carried value (writing `rank + 1` and consuming both, so a merge
    /// result can never merge again within the same tilt), a different cell
    /// flushes the carried value and takes its place. The scan order is the
    /// tie-break: the tile nearer the destination edge wins the merge.
    ///
    /// Returns whether any cell's position or value changed. A tilt that
    /// changes nothing must not advance the game (no tile placement, no RNG
    /// draw, no history commit).
    pub fn tilt(&mut self, dx: i32, dy: i32, mut anim: Option<&mut AnimState>) -> bool {
        debug_assert!((dx != 0) != (dy != 0));
        debug_assert!(dx.abs() <= 1 && dy.abs() <= 1);

        let cols = GRID_COLS as i32;
        let mut begin: i32 = if dx + dy > 0 { NUM_CELLS as i32 - 1 } else { 0 };
        let step_major = -(dx * cols + dy);
        let step_minor = -(dy * cols + dx);
        let (n, m) = if dx != 0 {
            (GRID_ROWS, GRID_COLS)
        } else {
            (GRID_COLS, GRID_ROWS)
        };

        let mut moved = false;

        for _ in 0..n {
            let stop = begin + m as i32 * step_minor;
            let mut from = begin;
            let mut to = begin;

            let mut carried: Rank = 0;
            let mut carried_from = from;
            while from != stop {
                let cell = self.cells[from as usize];
                if cell != 0 {
                    if carried != 0 {
                        if carried == cell {
                            if let Some(anim) = anim.as_deref_mut() {
                                anim.merge(carried_from as u8, from as u8, to as u8, carried);
                            }
                            moved = true;
                            self.cells[to as usize] = carried + 1;
                            carried = 0;
                        } else {
                            if let Some(anim) = anim.as_deref_mut() {
                                anim.slide(carried_from as u8, to as u8, carried);
                            }
                            if carried_from != to {
                                moved = true;
                            }
                            self.cells[to as usize] = carried;
                            carried = cell;
                            carried_from = from;
                        }
                        to += step_minor;
                    } else {
                        carried = cell;
                        carried_from = from;
                    }
                }
                from += step_minor;
            }
            if carried != 0 {
                if let Some(anim) = anim.as_deref_mut() {
                    anim.slide(carried_from as u8, to as u8, carried);
                }
                if carried_from != to {
                    moved = true;
                }
                self.cells[to as usize] = carried;
                to += step_minor;
            }
            while to != stop {
                self.cells[to as usize] = 0;
                to += step_minor;
            }

            begin += step_major;
        }

        moved
    }

    /// Performs a full move: tilt toward `dir`, then place one new tile iff
    /// the tilt changed the board. Returns whether the board changed.
    pub fn apply_move(
        &mut self,
        dir: Direction,
        rng: &mut Xorshift128,
        mut anim: Option<&mut AnimState>,
    ) -> bool {
        if let Some(anim) = anim.as_deref_mut() {
            anim.reset();
        }
        let moved = self.tilt(dir.dx(), dir.dy(), anim.as_deref_mut());
        if moved {
            self.place(1, rng, anim);
        }
        moved
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let rank = self.cells[row * GRID_COLS + col];
                if rank == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", 1u32 << rank)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [Rank; NUM_CELLS]) -> Board {
        Board { cells }
    }

    #[test]
    fn test_pack_round_trip() {
        let b = board([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(Board::from_key(b.pack()), b);

        let empty = Board::new();
        assert_eq!(empty.pack(), 0);
        assert_eq!(Board::from_key(0), empty);

        // cell 0 lands in the most significant nibble
        let mut one = Board::new();
        one.cells[0] = 0xF;
        assert_eq!(one.pack(), 0xF000_0000_0000_0000);
    }

    #[test]
    fn test_pack_round_trip_random_boards() {
        let mut rng = Xorshift128::new(0xb0a2d);
        for _ in 0..500 {
            let mut b = Board::new();
            for cell in b.cells.iter_mut() {
                *cell = rng.next_n(16) as Rank;
            }
            assert_eq!(Board::from_key(b.pack()), b);
        }
    }

    #[test]
    fn test_free_cells_row_major() {
        let mut b = Board::new();
        b.cells[1] = 3;
        b.cells[7] = 1;
        let free = b.free_cells();
        assert_eq!(b.count_free(), 14);
        assert_eq!(free.len(), 14);
        assert_eq!(&free[..4], &[0, 2, 3, 4]);
        assert!(free.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tilt_left_merges_and_compacts() {
        let mut b = board([
            1, 1, 2, 2, //
            0, 3, 0, 3, //
            4, 0, 0, 4, //
            5, 0, 0, 0,
        ]);
        assert!(b.tilt(-1, 0, None));
        assert_eq!(
            b.cells,
            [
                2, 3, 0, 0, //
                4, 0, 0, 0, //
                5, 0, 0, 0, //
                5, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn test_tilt_right_merges_toward_right_edge() {
        let mut b = board([
            1, 1, 2, 2, //
            0, 3, 0, 3, //
            4, 0, 0, 4, //
            5, 0, 0, 0,
        ]);
        assert!(b.tilt(1, 0, None));
        assert_eq!(
            b.cells,
            [
                0, 0, 2, 3, //
                0, 0, 0, 4, //
                0, 0, 0, 5, //
                0, 0, 0, 5,
            ]
        );
    }

    #[test]
    fn test_tilt_up_and_down() {
        let start = [
            1, 1, 2, 2, //
            0, 3, 0, 3, //
            4, 0, 0, 4, //
            5, 0, 0, 0,
        ];
        let mut up = board(start);
        assert!(up.tilt(0, -1, None));
        assert_eq!(
            up.cells,
            [
                1, 1, 2, 2, //
                4, 3, 0, 3, //
                5, 0, 0, 4, //
                0, 0, 0, 0,
            ]
        );

        let mut down = board(start);
        assert!(down.tilt(0, 1, None));
        assert_eq!(
            down.cells,
            [
                0, 0, 0, 0, //
                1, 0, 0, 2, //
                4, 1, 0, 3, //
                5, 3, 2, 4,
            ]
        );
    }

    /// Three equal tiles merge exactly once, pairing the two nearest the
    /// destination edge.
    #[test]
    fn test_triple_merges_once_toward_destination() {
        let mut left = Board::new();
        left.cells[0..4].copy_from_slice(&[2, 2, 2, 0]);
        assert!(left.tilt(-1, 0, None));
        assert_eq!(&left.cells[0..4], &[3, 2, 0, 0]);

        let mut right = Board::new();
        right.cells[0..4].copy_from_slice(&[2, 2, 2, 0]);
        assert!(right.tilt(1, 0, None));
        assert_eq!(&right.cells[0..4], &[0, 0, 2, 3]);
    }

    /// A merge result must not merge again within the same tilt.
    #[test]
    fn test_no_chain_merges() {
        let mut b = Board::new();
        b.cells[0..4].copy_from_slice(&[1, 1, 2, 0]);
        assert!(b.tilt(-1, 0, None));
        // [1,1,2] -> [2,2], not [3]
        assert_eq!(&b.cells[0..4], &[2, 2, 0, 0]);
    }

    #[test]
    fn test_tilt_noop_leaves_board_untouched() {
        let b = board([
            1, 2, 0, 0, //
            3, 4, 0, 0, //
            5, 6, 0, 0, //
            7, 1, 0, 0,
        ]);
        let mut tilted = b;
        assert!(!tilted.tilt(-1, 0, None));
        assert_eq!(tilted, b);
    }

    /// A full line can still report "moved" when merges change values even
    /// though occupancy does not free the scan's write cursor early.
    #[test]
    fn test_full_line_merge_reports_moved() {
        let mut b = board([
            1, 1, 2, 3, //
            4, 5, 6, 7, //
            1, 2, 3, 4, //
            5, 6, 7, 1,
        ]);
        assert!(b.tilt(-1, 0, None));
        assert_eq!(&b.cells[0..4], &[2, 2, 3, 0]);
    }

    #[test]
    fn test_finished_detection() {
        let full_no_matches = board([
            1, 2, 1, 2, //
            2, 1, 2, 1, //
            1, 2, 1, 2, //
            2, 1, 2, 1,
        ]);
        assert!(full_no_matches.finished());
        assert!(!full_no_matches.has_direct_matches());

        // freeing any one cell makes it unfinished
        for i in 0..NUM_CELLS {
            let mut b = full_no_matches;
            b.cells[i] = 0;
            assert!(!b.finished(), "cell {i}");
        }

        let mut matchable = full_no_matches;
        matchable.cells[5] = matchable.cells[6];
        assert!(!matchable.finished());
        assert!(matchable.has_direct_matches());
    }

    #[test]
    fn test_place_uses_recorded_draw_sequence() {
        // seed 1: next_n(10) = 6 -> rank 1, next_n(16) picks a slot, then
        // 5 -> rank 1 again. Golden packed state recorded from the
        // reference trajectory.
        let mut b = Board::new();
        let mut rng = Xorshift128::new(1);
        b.place(2, &mut rng, None);
        assert_eq!(b.pack(), 0x0000_1000_1000_0000);
        assert_eq!(rng.words(), (0x9dcc_242a, 0x8cd9_cae7, 0x8ba1_c0e0, 0x4e95_0ef4));
    }

    #[test]
    fn test_place_stops_when_full() {
        let mut b = board([1; NUM_CELLS]);
        b.cells[3] = 0;
        let mut rng = Xorshift128::new(7);
        b.place(5, &mut rng, None);
        assert_eq!(b.count_free(), 0);
    }

    #[test]
    fn test_apply_move_noop_consumes_no_rng() {
        let mut b = board([
            1, 2, 0, 0, //
            3, 4, 0, 0, //
            5, 6, 0, 0, //
            7, 1, 0, 0,
        ]);
        let before = b;
        let mut rng = Xorshift128::new(99);
        let rng_before = rng;
        assert!(!b.apply_move(Direction::Left, &mut rng, None));
        assert_eq!(b, before);
        assert_eq!(rng, rng_before);
    }

    #[test]
    fn test_apply_move_places_one_tile_on_change() {
        let mut b = Board::new();
        b.cells[0] = 1;
        b.cells[1] = 1;
        let mut rng = Xorshift128::new(1);
        assert!(b.apply_move(Direction::Left, &mut rng, None));
        assert_eq!(b.cells[0], 2);
        // merged pair plus exactly one spawned tile
        assert_eq!(b.count_free(), NUM_CELLS - 2);
    }

    #[test]
    fn test_move_events_reported() {
        let mut b = Board::new();
        b.cells[0] = 1;
        b.cells[1] = 1;
        let mut rng = Xorshift128::new(1);
        let mut anim = AnimState::new();
        assert!(b.apply_move(Direction::Left, &mut rng, Some(&mut anim)));
        assert!(anim.tiles_changed());
        assert!(anim.events().iter().any(|e| matches!(
            e,
            crate::anim::TileEvent::Merge { from_a: 0, from_b: 1, to: 0, rank: 1 }
        )));
        assert!(
            anim.events()
                .iter()
                .any(|e| matches!(e, crate::anim::TileEvent::Spawn { .. }))
        );
    }
}
