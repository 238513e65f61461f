// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Read-only view of the engine for presentation code.

use crate::board::{Move, State};

/// Engine state after the latest command.
///
/// All vectors are indexed by beam member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub beam: Vec<State>,

    /// Current conflict count of each member.
    pub conflicts: Vec<usize>,

    /// Minimal reachable cost of each member, from the heuristic matrix.
    pub min_scores: Vec<usize>,

    /// Minimal-cost moves of each member.
    pub candidates: Vec<Vec<Move>>,

    /// Move drawn for each member, `None` when it has no candidates.
    pub selected: Vec<Option<Move>>,

    pub best_index: usize,

    /// Number of moves committed since initialization or reset.
    pub step_count: usize,

    /// Best member's state before the latest committed step.
    pub previous_state: State,
}

impl Snapshot {
    pub fn best_state(&self) -> &State {
        &self.beam[self.best_index]
    }

    pub fn best_conflicts(&self) -> usize {
        self.conflicts[self.best_index]
    }

    /// Minimal reachable cost of the best member (the "H" value).
    pub fn best_score(&self) -> usize {
        self.min_scores[self.best_index]
    }

    pub fn best_candidates(&self) -> &[Move] {
        &self.candidates[self.best_index]
    }

    pub fn best_selected(&self) -> Option<Move> {
        self.selected[self.best_index]
    }

    pub fn is_solved(&self) -> bool {
        self.best_conflicts() == 0
    }

    pub fn beam_width(&self) -> usize {
        self.beam.len()
    }
}

/// Outcome of a bounded run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Full beam sweeps performed.
    pub sweeps: usize,

    /// Best member reached zero conflicts.
    pub solved: bool,

    /// Stopped because no member had a move left.
    pub stalled: bool,

    pub snapshot: Snapshot,
}
