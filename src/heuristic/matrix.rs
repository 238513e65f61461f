// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lookahead table of relocation costs.
//!
//! `cost(k, col, row)` is the conflict count of beam member `k` after moving
//! its queen in column `col` to `row`. Where `row` is already the queen's row
//! the cell holds the member's own, unmodified score.
//!
//! # Scaling
//!
//! Each of the N² cells per member costs one O(N²) conflict evaluation, so a
//! build is O(K·N⁴). That is fine for the board sizes supported here and is
//! the first thing to replace (with incremental per-queen attack counts) if
//! the board grows.

use super::conflicts::conflicts;
use crate::board::{State, QUEEN_COUNT};

/// Costs for one beam member, indexed `[column][row]`.
pub type CostGrid = [[usize; QUEEN_COUNT]; QUEEN_COUNT];

/// Relocation costs for every member of a beam.
///
/// Built fresh from a beam and never updated; it has no identity beyond the
/// beam it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicMatrix {
    grids: Vec<CostGrid>,
}

impl HeuristicMatrix {
    /// Compute the cost of every single-queen relocation for every member.
    ///
    /// The beam is only read; each relocation is scored on a scratch copy.
    pub fn build(beam: &[State]) -> Self {
        let grids = beam.iter().map(member_grid).collect();
        Self { grids }
    }

    /// Cost of moving member `member`'s queen in `column` to `row`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn cost(&self, member: usize, column: usize, row: usize) -> usize {
        self.grids[member][column][row]
    }

    /// Full cost grid of one member.
    pub fn grid(&self, member: usize) -> &CostGrid {
        &self.grids[member]
    }

    /// Number of beam members covered.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

fn member_grid(state: &State) -> CostGrid {
    let current = conflicts(state);
    let mut grid = [[0; QUEEN_COUNT]; QUEEN_COUNT];

    for (column, costs) in grid.iter_mut().enumerate() {
        for (row, cost) in costs.iter_mut().enumerate() {
            *cost = if state[column] == row {
                current
            } else {
                conflicts(&state.with_queen_at(column, row))
            };
        }
    }

    grid
}
