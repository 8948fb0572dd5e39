// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are kept by the engine and the solver, and can be read back after
//! a search to see how much work it did and why branches were pruned.

use crate::realization::ExtendRejection;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Calls of the inner search.
    Searches,
    /// Realizations popped from the work list.
    Iterations,
    /// Successful extensions (complete or pushed).
    Extensions,
    /// Extensions dropped because their domain set was already visited.
    DuplicateDomains,
    /// Searches stopped by the iteration cap.
    Bailouts,
    /// Relaxed instances tried by the solver.
    Relaxations,
}

const COUNT: usize = Counters::COUNT + ExtendRejection::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one rejection of the given kind.
    pub fn record_rejection(&mut self, rejection: &ExtendRejection) {
        self.stats[Counters::COUNT + rejection.index()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of rejections of the same kind as `rejection`.
    pub fn rejections(&self, rejection: &ExtendRejection) -> u64 {
        self.stats[Counters::COUNT + rejection.index()]
    }

    /// Rejections of all kinds.
    pub fn total_rejections(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }

    /// Add another set of counters to this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }

    pub fn reset(&mut self) {
        self.stats = [0; COUNT];
    }
}
