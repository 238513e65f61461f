// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the engine as it steps, sweeps, and absorbs no-op commands.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Moves committed to a beam member.
    MovesApplied,
    /// Full sweeps performed by runs to completion.
    Sweeps,
    /// Steps refused because the best member was already solved.
    SolvedNoOps,
    /// Steps refused because the best member had no move to apply.
    MissingMoves,
    Resets,
    /// Times the best member reached zero conflicts.
    Solutions,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
