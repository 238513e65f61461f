// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Queen placements.
//!
//! A state holds exactly one queen per column. Index is the column, value is
//! the row. The fixed-size array keeps the length invariant in the type; the
//! constructors keep every row inside `0..QUEEN_COUNT`.

use std::fmt;
use std::ops::Index;

use rand::Rng;

use super::constants::QUEEN_COUNT;
use super::moves::Move;
use crate::error::{EngineError, Result};

/// One queen per column, `rows[column]` is the row it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    rows: [usize; QUEEN_COUNT],
}

impl State {
    /// Create a state, rejecting any row off the board.
    pub fn new(rows: [usize; QUEEN_COUNT]) -> Result<Self> {
        for (column, &row) in rows.iter().enumerate() {
            check_row(column, row)?;
        }
        Ok(Self { rows })
    }

    /// Create a state from a slice, which must have exactly QUEEN_COUNT entries.
    pub fn from_slice(rows: &[usize]) -> Result<Self> {
        let rows: [usize; QUEEN_COUNT] =
            rows.try_into().map_err(|_| EngineError::WrongLength {
                expected: QUEEN_COUNT,
                got: rows.len(),
            })?;
        Self::new(rows)
    }

    /// Place every queen on a uniformly random row.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut rows = [0; QUEEN_COUNT];
        for row in rows.iter_mut() {
            *row = rng.gen_range(0..QUEEN_COUNT);
        }
        Self { rows }
    }

    /// Row of the queen in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column >= QUEEN_COUNT`.
    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    pub fn rows(&self) -> &[usize; QUEEN_COUNT] {
        &self.rows
    }

    /// True when `mv` is on the board and actually relocates a queen.
    pub fn is_move(&self, mv: Move) -> bool {
        mv.column < QUEEN_COUNT && mv.row < QUEEN_COUNT && self.rows[mv.column] != mv.row
    }

    /// Copy of this state with the queen in `column` placed on `row`.
    ///
    /// Used for exploratory edits; `self` is untouched. Placing the queen on
    /// its current row returns an identical copy.
    pub(crate) fn with_queen_at(&self, column: usize, row: usize) -> Self {
        debug_assert!(column < QUEEN_COUNT && row < QUEEN_COUNT);
        let mut scratch = *self;
        scratch.rows[column] = row;
        scratch
    }

    /// Relocate a queen in place.
    ///
    /// Rejects moves off the board and moves onto the queen's current row;
    /// on error the state is unchanged.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        if mv.column >= QUEEN_COUNT {
            return Err(EngineError::ColumnOutOfRange {
                column: mv.column,
                size: QUEEN_COUNT,
            });
        }
        check_row(mv.column, mv.row)?;
        if self.rows[mv.column] == mv.row {
            return Err(EngineError::IdentityMove {
                column: mv.column,
                row: mv.row,
            });
        }
        self.rows[mv.column] = mv.row;
        Ok(())
    }
}

fn check_row(column: usize, row: usize) -> Result<()> {
    if row >= QUEEN_COUNT {
        return Err(EngineError::RowOutOfRange {
            column,
            row,
            size: QUEEN_COUNT,
        });
    }
    Ok(())
}

impl Index<usize> for State {
    type Output = usize;

    fn index(&self, column: usize) -> &usize {
        &self.rows[column]
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", row)?;
        }
        write!(f, "]")
    }
}
