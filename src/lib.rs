// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Local beam search for non-attacking queen placements.
//!
//! Searches for a placement of N queens on an N×N board (N=6 by default, see
//! [`board::QUEEN_COUNT`]) such that no two attack each other, using a local
//! beam search with random tie-breaking among steepest-descent moves.
//!
//! # Architecture
//!
//! Data flows one way per step:
//!
//! 1. **conflicts**: attacking-pair count of a state
//! 2. **HeuristicMatrix**: for every beam member, the conflict count after each
//!    possible single-queen relocation
//! 3. **select**: minimal-cost moves per member, plus the best member (the
//!    previous best is carried into the comparison)
//! 4. **BeamEngine**: commits moves, keeps the step count and the best
//!    member's previous state, and publishes a [`Snapshot`]
//!
//! The matrix and selections are rebuilt from scratch after every change; only
//! the beam, the carried best index, the step count, and the previous state
//! persist.
//!
//! # Limits
//!
//! This is a local heuristic search. It can stall on a plateau or cycle, so
//! runs to completion always carry a sweep bound.

pub mod board;
pub mod engine;
pub mod error;
pub mod heuristic;
pub mod selection;

// Re-export commonly used types
pub use board::{Move, State, QUEEN_COUNT};
pub use engine::{BeamEngine, EngineConfig, RunReport, Snapshot};
pub use error::{EngineError, Result};
pub use heuristic::{conflicts, HeuristicMatrix};
pub use selection::{pick_one, select, Selection};
