// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Attacking-pair count.

use crate::board::{State, QUEEN_COUNT};

/// Count attacking queen pairs.
///
/// For every column pair `c1 < c2` with distance `d = c2 - c1`, one is added
/// for each of:
/// - same row
/// - `state[c2] == state[c1] + d` (descending diagonal)
/// - `state[c1] == state[c2] + d` (ascending diagonal)
///
/// O(N²). A state is a solution iff the count is zero.
pub fn conflicts(state: &State) -> usize {
    let mut count = 0;

    for c1 in 0..QUEEN_COUNT {
        for c2 in (c1 + 1)..QUEEN_COUNT {
            let distance = c2 - c1;
            let (r1, r2) = (state[c1], state[c2]);

            if r1 == r2 {
                count += 1;
            }
            if r2 == r1 + distance {
                count += 1;
            }
            if r1 == r2 + distance {
                count += 1;
            }
        }
    }

    count
}

/// True when no two queens attack each other.
pub fn is_solution(state: &State) -> bool {
    conflicts(state) == 0
}
