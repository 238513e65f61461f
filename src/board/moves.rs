// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single-queen relocation moves.

use std::fmt;

/// Move the queen currently in `column` to `row`.
///
/// A move is only meaningful against a particular state: it is valid when
/// `row` differs from the row the column's queen already occupies. See
/// [`State::apply`](crate::board::State::apply) for the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub column: usize,
    pub row: usize,
}

impl Move {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(col {}, row {})", self.column, self.row)
    }
}
