// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scoring of queen placements.
//!
//! - [`conflicts`]: attacking-pair count of one state
//! - [`HeuristicMatrix`]: lookahead table of the score after every possible
//!   single-queen relocation, for each member of a beam
//!
//! Both are pure: they read states and return fresh values.

pub mod conflicts;
pub mod matrix;

pub use conflicts::{conflicts, is_solution};
pub use matrix::{CostGrid, HeuristicMatrix};
