//! Fixed-capacity board-keyed cache used as a transposition table.
//!
//! The cache maps packed board keys to search records. Capacity is fixed at
//! construction: 32768 entries in 8-way associative buckets. Eviction is
//! positional LRU — a new key lands in slot 0 and pushes everything else one
//! slot toward the tail, silently discarding the oldest entry. A lookup that
//! misses because of an eviction is normal control flow, never an error.

use aligned_vec::{AVec, ConstAlign};

use crate::types::BoardKey;

/// Total entry capacity.
pub const ENTRY_COUNT: usize = 1 << 15;

/// Entries per bucket.
pub const BUCKET_SIZE: usize = 8;

/// Number of buckets; a power of two so the mixed key can be masked.
pub const BUCKET_COUNT: usize = ENTRY_COUNT / BUCKET_SIZE;

const BUCKET_INDEX_MASK: u64 = (BUCKET_COUNT - 1) as u64;

/// Bound classification for a cached alpha-beta score.
///
/// A pruned subtree yields a score that is only a one-sided bound on the
/// true value, and such a score is reusable only under a compatible window:
/// - `Exact` — usable under any window;
/// - `Lower` — the true score is `>=` the stored score; usable only when the
///   stored score already fails high against the current beta;
/// - `Upper` — the true score is `<=` the stored score; usable only when the
///   stored score already fails low against the current alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Bound {
    #[default]
    None = 0,
    Exact = 1,
    Lower = 2,
    Upper = 3,
}

/// Avalanche mixer spreading packed board keys over the bucket range.
///
/// A multiply/shift/xor mixer (not cryptographic); adjacent board keys
/// differ in few nibbles, and the mix keeps them from clustering into the
/// same bucket.
#[inline]
pub fn mix64(key: u64) -> u64 {
    let mut key = (!key).wrapping_add(key << 21);
    key ^= key >> 24;
    key = key.wrapping_mul(265);
    key ^= key >> 14;
    key = key.wrapping_mul(21);
    key ^= key >> 28;
    key.wrapping_add(key << 31)
}

#[derive(Clone, Copy)]
struct Bucket<T> {
    keys: [BoardKey; BUCKET_SIZE],
    values: [T; BUCKET_SIZE],
}

impl<T: Copy + Default> Bucket<T> {
    fn empty() -> Self {
        Bucket {
            keys: [0; BUCKET_SIZE],
            values: [T::default(); BUCKET_SIZE],
        }
    }
}

/// Fixed-capacity, 8-way associative cache keyed by packed board state.
///
/// Key 0 (the all-empty board) is reserved as the empty-slot marker; the
/// searchers never visit an all-empty board, so the restriction costs
/// nothing and keeps slots a single key compare.
pub struct BoardCache<T> {
    buckets: AVec<Bucket<T>, ConstAlign<64>>,
}

impl<T: Copy + Default> BoardCache<T> {
    /// Allocates the cache with every slot empty.
    pub fn new() -> Self {
        BoardCache {
            buckets: AVec::from_iter(64, (0..BUCKET_COUNT).map(|_| Bucket::empty())),
        }
    }

    /// Clears every entry.
    pub fn reset(&mut self) {
        self.buckets.fill(Bucket::empty());
    }

    #[inline]
    fn bucket_index(key: BoardKey) -> usize {
        (mix64(key) & BUCKET_INDEX_MASK) as usize
    }

    /// Looks up `key`, comparing full 64-bit keys within its bucket.
    #[inline]
    pub fn get(&self, key: BoardKey) -> Option<&T> {
        debug_assert!(key != 0);
        let bucket = &self.buckets[Self::bucket_index(key)];
        for i in 0..BUCKET_SIZE {
            if bucket.keys[i] == key {
                return Some(&bucket.values[i]);
            }
        }
        None
    }

    /// Inserts or updates `key`.
    ///
    /// An existing key is overwritten in place. A new key shifts every
    /// occupant one slot toward the tail and takes slot 0; whatever held the
    /// last slot is discarded.
    pub fn put(&mut self, key: BoardKey, value: T) {
        debug_assert!(key != 0);
        let bucket = &mut self.buckets[Self::bucket_index(key)];
        for i in 0..BUCKET_SIZE {
            if bucket.keys[i] == key {
                bucket.values[i] = value;
                return;
            }
        }
        for i in (1..BUCKET_SIZE).rev() {
            bucket.keys[i] = bucket.keys[i - 1];
            bucket.values[i] = bucket.values[i - 1];
        }
        bucket.keys[0] = key;
        bucket.values[0] = value;
    }
}

impl<T: Copy + Default> Default for BoardCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
