// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on QUEEN_COUNT feature selection.
//!
//! Tests with literal boards (which only make sense on one board size) use
//! `#[cfg(queens_eq_6)]` instead of repeating the feature expression.

fn main() {
    println!("cargo:rustc-check-cfg=cfg(queens_eq_6)");

    // QUEEN_COUNT = 6 (default or explicit queens_6 feature)
    #[cfg(any(
        feature = "queens_6",
        not(any(feature = "queens_4", feature = "queens_5", feature = "queens_8"))
    ))]
    println!("cargo:rustc-cfg=queens_eq_6");
}
