//! Fair-shuffle sequencing.
//!
//! A `FairShuffle` deals every pool element exactly once per *cycle*. When a
//! cycle is exhausted the full pool is reshuffled into a fresh permutation
//! and the cursor starts over. Across cycles an element may reappear (even
//! back to back at the seam); within a cycle it never does.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Shuffled copy of a pool plus a cursor into it.
///
/// Invariant: `cursor <= order.len()`, and the pool is never empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FairShuffle<T> {
    pool: Vec<T>,
    order: Vec<T>,
    cursor: usize,
    cycle: u32,
}

impl<T: Clone> FairShuffle<T> {
    /// Create a sequencer over `pool` and shuffle the first cycle.
    ///
    /// Returns `None` for an empty pool.
    pub fn new(pool: Vec<T>, rng: &mut GameRng) -> Option<Self> {
        if pool.is_empty() {
            return None;
        }
        let mut order = pool.clone();
        rng.shuffle(&mut order);
        Some(Self {
            pool,
            order,
            cursor: 0,
            cycle: 1,
        })
    }

    /// Deal the next element, reshuffling first if the cycle is used up.
    pub fn next(&mut self, rng: &mut GameRng) -> T {
        if self.cursor >= self.order.len() {
            self.reshuffle(rng);
        }
        let item = self.order[self.cursor].clone();
        self.cursor += 1;
        item
    }

    /// Throw away the rest of the current cycle and start a new one.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.reshuffle(rng);
    }

    fn reshuffle(&mut self, rng: &mut GameRng) {
        self.order.clone_from(&self.pool);
        rng.shuffle(&mut self.order);
        self.cursor = 0;
        self.cycle += 1;
    }

    /// Number of elements in the underlying pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Elements still to be dealt before the next reshuffle.
    #[must_use]
    pub fn remaining_in_cycle(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Current cycle number, starting at 1.
    #[must_use]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// The underlying pool in its original order.
    #[must_use]
    pub fn pool(&self) -> &[T] {
        &self.pool
    }
}
