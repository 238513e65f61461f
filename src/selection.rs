// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Move selection from a heuristic matrix.
//!
//! For each beam member the selector collects every relocation that reaches
//! the member's minimal cost, then picks the best member. Two tie-breaks are
//! involved:
//!
//! - Among moves: uniform random choice, see [`pick_one`].
//! - Among members: the previous best index seeds the comparison and is only
//!   replaced by a strictly better member. This is not a pure argmin; the
//!   carried index changes long-run trajectories, so callers must thread the
//!   previous value through.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::board::{Move, State, QUEEN_COUNT};
use crate::heuristic::HeuristicMatrix;

/// Result of scanning a heuristic matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Per member, every move reaching that member's minimal cost, in
    /// column-major scan order.
    pub candidates: Vec<Vec<Move>>,

    /// Per member, the minimal cost found in its grid.
    pub best_scores: Vec<usize>,

    /// Index of the best member.
    pub best_index: usize,
}

impl Selection {
    /// Minimal cost of the best member, or `None` for an empty beam.
    pub fn best_score(&self) -> Option<usize> {
        self.best_scores.get(self.best_index).copied()
    }

    /// Draw one move per member from its candidate list.
    pub fn pick_all<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Option<Move>> {
        self.candidates
            .iter()
            .map(|moves| pick_one(rng, moves))
            .collect()
    }
}

/// Collect minimal-cost moves per member and choose the best member.
///
/// `previous_best` is the best index from the last selection (or 0 on the
/// first). An index past the end of the beam is treated as 0.
pub fn select(matrix: &HeuristicMatrix, beam: &[State], previous_best: usize) -> Selection {
    debug_assert_eq!(matrix.len(), beam.len());

    let mut candidates = Vec::with_capacity(beam.len());
    let mut best_scores = Vec::with_capacity(beam.len());

    for (k, state) in beam.iter().enumerate() {
        let (score, moves) = member_moves(matrix, k, state);
        best_scores.push(score);
        candidates.push(moves);
    }

    let mut best_index = if previous_best < beam.len() {
        previous_best
    } else {
        0
    };
    for (i, &score) in best_scores.iter().enumerate() {
        if best_scores[best_index] > score {
            best_index = i;
        }
    }

    trace!(?best_scores, best_index, "selected best member");

    Selection {
        candidates,
        best_scores,
        best_index,
    }
}

/// Scan one member's grid column-major, keeping the moves tied at the minimum.
///
/// The scan starts from cell (0, 0). A cell where the queen already sits can
/// set or match the minimum but is never recorded as a move.
fn member_moves(matrix: &HeuristicMatrix, k: usize, state: &State) -> (usize, Vec<Move>) {
    let grid = matrix.grid(k);
    let mut best = grid[0][0];
    let mut moves = Vec::new();

    for column in 0..QUEEN_COUNT {
        for row in 0..QUEEN_COUNT {
            let cost = grid[column][row];
            if cost < best {
                best = cost;
                moves.clear();
                if state[column] != row {
                    moves.push(Move::new(column, row));
                }
            } else if cost == best && state[column] != row {
                moves.push(Move::new(column, row));
            }
        }
    }

    (best, moves)
}

/// Pick a move uniformly at random, `None` for an empty list.
pub fn pick_one<R: Rng + ?Sized>(rng: &mut R, candidates: &[Move]) -> Option<Move> {
    candidates.choose(rng).copied()
}
