// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the queens board.
//!
//! This module defines QUEEN_COUNT (board size N) and the derived constants.
//! QUEEN_COUNT can be configured at compile time via cargo features.
//!
//! # Supported QUEEN_COUNT values
//!
//! - 4: 4×4 board (2 solutions)
//! - 5: 5×5 board (10 solutions)
//! - 6: 6×6 board (4 solutions) - **default**
//! - 8: 8×8 board (92 solutions)
//!
//! # Example
//!
//! ```bash
//! # Default: QUEEN_COUNT=6
//! cargo build
//!
//! # Build for the classic 8×8 board
//! cargo build --features queens_8
//! ```

/// Number of queens, which is also the number of rows and columns.
///
/// This is configurable at compile time via cargo features:
/// - `queens_4` → QUEEN_COUNT=4
/// - `queens_5` → QUEEN_COUNT=5
/// - `queens_6` → QUEEN_COUNT=6 (explicit)
/// - `queens_8` → QUEEN_COUNT=8
/// - (default) → QUEEN_COUNT=6 (when no feature specified)
#[cfg(not(any(
    feature = "queens_4",
    feature = "queens_5",
    feature = "queens_6",
    feature = "queens_8"
)))]
pub const QUEEN_COUNT: usize = 6;

#[cfg(feature = "queens_4")]
pub const QUEEN_COUNT: usize = 4;

#[cfg(feature = "queens_5")]
pub const QUEEN_COUNT: usize = 5;

#[cfg(feature = "queens_6")]
pub const QUEEN_COUNT: usize = 6;

#[cfg(feature = "queens_8")]
pub const QUEEN_COUNT: usize = 8;

/// Default number of states tracked in parallel by the beam.
pub const DEFAULT_BEAM_WIDTH: usize = 3;

/// Default bound on full beam sweeps for a run to completion.
pub const DEFAULT_SWEEP_LIMIT: usize = 10_000;

/// Compute binomial coefficient (n choose k) at compile time.
const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut result = 1;
    let mut i = 0;
    while i < k {
        result = result * (n - i) / (i + 1);
        i += 1;
    }
    result
}

/// Number of unordered column pairs, C(QUEEN_COUNT, 2).
///
/// The conflict count visits each pair once, and at most one of the three
/// attack tests can hold for a pair, so this is also the largest possible
/// conflict count. For QUEEN_COUNT=6 this is 15.
pub const PAIR_COUNT: usize = choose(QUEEN_COUNT, 2);

/// Number of (column, row) cells on the board.
pub const CELL_COUNT: usize = QUEEN_COUNT * QUEEN_COUNT;

const _: () = assert!(QUEEN_COUNT >= 4, "QUEEN_COUNT must be at least 4");
