// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board representation for the queens search.
//!
//! - State: one queen per column, stored as the row it occupies
//! - Move: relocate the queen of one column to another row
//! - constants: compile-time board size and derived values

pub mod constants;
pub mod moves;
pub mod state;

pub use constants::*;
pub use moves::Move;
pub use state::State;
