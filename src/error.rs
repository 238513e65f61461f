// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the beam search engine.
//!
//! Only construction and run configuration surface errors to callers. Engine
//! commands absorb invalid moves and return the unchanged snapshot.

use thiserror::Error;

/// Errors that can occur when building or driving a beam search engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The beam must hold at least one state.
    #[error("Beam width {width} is invalid (must be at least 1)")]
    InvalidBeamWidth { width: usize },

    /// A state or move names a row outside the board.
    #[error("Row {row} in column {column} is off the board (size {size})")]
    RowOutOfRange { column: usize, row: usize, size: usize },

    /// A move names a column outside the board.
    #[error("Column {column} is off the board (size {size})")]
    ColumnOutOfRange { column: usize, size: usize },

    /// A state was given with the wrong number of columns.
    #[error("State has {got} columns, expected {expected}")]
    WrongLength { expected: usize, got: usize },

    /// A move that leaves the queen where it already is.
    #[error("Move to row {row} in column {column} does not move the queen")]
    IdentityMove { column: usize, row: usize },

    /// More seed states than beam members.
    #[error("Got {got} seed states for a beam of {expected}")]
    SeedStateCount { expected: usize, got: usize },

    /// A run to completion with no sweep bound could loop forever.
    #[error("Run to completion needs a sweep limit (none given or configured)")]
    UnboundedRun,
}

/// Type alias for Results using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;
