// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Local beam search controller.
//!
//! The engine owns a fixed-width beam of queen placements and drives it one
//! command at a time. Every command that changes the beam ends with a
//! refresh:
//!
//! 1. Build a fresh [`HeuristicMatrix`] from the beam
//! 2. [`select`] the minimal-cost moves per member and the best member,
//!    seeded with the previous best index
//! 3. Draw one move per member with [`pick_one`](crate::selection::pick_one)
//!
//! Commands are synchronous and atomic from the caller's side. Invalid or
//! pointless commands (stepping a solved beam, a member with no move) leave
//! the beam untouched and return the unchanged snapshot.
//!
//! All randomness comes from one generator owned by the engine and seeded
//! once, so a fixed seed reproduces a whole run.
//!
//! # Example
//!
//! ```
//! use queens_beam::engine::{BeamEngine, EngineConfig};
//!
//! let mut engine = BeamEngine::new(EngineConfig::default().with_seed(7)).unwrap();
//! let snapshot = engine.step();
//! assert!(snapshot.step_count <= 1);
//!
//! let report = engine.run_to_completion(Some(500)).unwrap();
//! assert!(report.sweeps <= 500);
//! ```

pub mod config;
pub mod snapshot;
pub mod statistics;

pub use config::EngineConfig;
pub use snapshot::{RunReport, Snapshot};
pub use statistics::{Counters, Statistics};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::board::{Move, State};
use crate::error::{EngineError, Result};
use crate::heuristic::{conflicts, is_solution, HeuristicMatrix};
use crate::selection::{select, Selection};

/// Beam search engine over queen placements.
///
/// Generic over the random source so tests can inject any seeded generator.
pub struct BeamEngine<R: Rng = StdRng> {
    config: EngineConfig,
    rng: R,
    beam: Vec<State>,

    /// Best member's state before the latest committed step.
    previous_state: State,

    step_count: usize,

    /// Carried between selections; see [`select`].
    best_index: usize,

    /// Derived from `beam` by the last refresh.
    selection: Selection,
    selected: Vec<Option<Move>>,

    statistics: Statistics,
}

impl BeamEngine<StdRng> {
    /// Create an engine with a fully random beam.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::initialize(config, &[])
    }

    /// Create an engine whose first members are `seed_states`; the rest are
    /// random.
    pub fn initialize(config: EngineConfig, seed_states: &[State]) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng, seed_states)
    }
}

impl<R: Rng> BeamEngine<R> {
    /// Create an engine drawing from `rng`. `config.seed` is ignored.
    pub fn with_rng(config: EngineConfig, mut rng: R, seed_states: &[State]) -> Result<Self> {
        config.validate()?;
        if seed_states.len() > config.beam_width {
            return Err(EngineError::SeedStateCount {
                expected: config.beam_width,
                got: seed_states.len(),
            });
        }

        let mut beam = seed_states.to_vec();
        while beam.len() < config.beam_width {
            beam.push(State::random(&mut rng));
        }
        let previous_state = beam[0];

        let mut engine = Self {
            config,
            rng,
            beam,
            previous_state,
            step_count: 0,
            best_index: 0,
            selection: Selection::default(),
            selected: Vec::new(),
            statistics: Statistics::new(),
        };
        engine.refresh();

        debug!(
            beam_width = engine.beam.len(),
            seeded = seed_states.len(),
            best_conflicts = engine.best_conflicts(),
            "initialized beam"
        );
        Ok(engine)
    }

    /// Commit the best member's selected move.
    ///
    /// No-op when the best member is already solved or has no move.
    pub fn step(&mut self) -> Snapshot {
        if self.is_solved() {
            self.statistics.increment_counter(Counters::SolvedNoOps);
            return self.snapshot();
        }

        let best = self.best_index;
        let Some(mv) = self.selected[best] else {
            self.statistics.increment_counter(Counters::MissingMoves);
            debug!(member = best, "best member has no move to apply");
            return self.snapshot();
        };

        self.previous_state = self.beam[best];
        if self.commit(best, mv) {
            self.step_count += 1;
        }
        self.refresh();
        self.note_solution();

        self.snapshot()
    }

    /// Sweep the beam until the best member is solved or the bound is hit.
    ///
    /// Each sweep commits every member's selected move to that member, then
    /// refreshes once. `sweep_limit` overrides the configured bound; with
    /// neither, the run is refused because it might never stop.
    pub fn run_to_completion(&mut self, sweep_limit: Option<usize>) -> Result<RunReport> {
        let limit = sweep_limit
            .or(self.config.sweep_limit)
            .ok_or(EngineError::UnboundedRun)?;

        let mut sweeps = 0;
        let mut stalled = false;

        while !self.is_solved() && sweeps < limit {
            let best_before = self.beam[self.best_index];

            let mut applied = 0;
            // Each member takes its own selected move; the matrix is rebuilt once per sweep.
            for member in 0..self.beam.len() {
                if let Some(mv) = self.selected[member] {
                    if self.commit(member, mv) {
                        applied += 1;
                    }
                }
            }

            if applied == 0 {
                stalled = true;
                break;
            }

            self.previous_state = best_before;
            self.step_count += applied;
            sweeps += 1;
            self.statistics.increment_counter(Counters::Sweeps);
            self.refresh();

            debug!(
                sweep = sweeps,
                applied,
                best_index = self.best_index,
                best_conflicts = self.best_conflicts(),
                "sweep complete"
            );
        }

        let solved = self.is_solved();
        if solved {
            self.note_solution();
        } else {
            info!(sweeps, stalled, limit, "run stopped before a solution");
        }

        Ok(RunReport {
            sweeps,
            solved,
            stalled,
            snapshot: self.snapshot(),
        })
    }

    /// Replace the whole beam with fresh random states.
    pub fn reset(&mut self) -> Snapshot {
        for state in self.beam.iter_mut() {
            *state = State::random(&mut self.rng);
        }
        self.previous_state = self.beam[0];
        self.step_count = 0;
        self.statistics.increment_counter(Counters::Resets);
        self.refresh();

        debug!(best_conflicts = self.best_conflicts(), "beam reset");
        self.snapshot()
    }

    /// Current state of the engine.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            beam: self.beam.clone(),
            conflicts: self.beam.iter().map(conflicts).collect(),
            min_scores: self.selection.best_scores.clone(),
            candidates: self.selection.candidates.clone(),
            selected: self.selected.clone(),
            best_index: self.best_index,
            step_count: self.step_count,
            previous_state: self.previous_state,
        }
    }

    pub fn is_solved(&self) -> bool {
        is_solution(&self.beam[self.best_index])
    }

    pub fn beam(&self) -> &[State] {
        &self.beam
    }

    pub fn best_index(&self) -> usize {
        self.best_index
    }

    pub fn best_conflicts(&self) -> usize {
        conflicts(&self.beam[self.best_index])
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Selected move of each member.
    pub fn selected_moves(&self) -> &[Option<Move>] {
        &self.selected
    }

    /// Last full selection (candidate lists and minimal scores).
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply `mv` to `member`.
    ///
    /// A rejected move is logged and leaves the beam unchanged.
    fn commit(&mut self, member: usize, mv: Move) -> bool {
        let from_row = self.beam[member].row(mv.column);
        match self.beam[member].apply(mv) {
            Ok(()) => {
                self.statistics.increment_counter(Counters::MovesApplied);
                debug!(
                    member,
                    %mv,
                    conflicts = conflicts(&self.beam[member]),
                    "committed move"
                );
                true
            }
            Err(err) => {
                warn!(member, %mv, %err, "rejected move");
                false
            }
        }
    }

    /// Recompute matrix, selection, and selected moves from the beam.
    fn refresh(&mut self) {
        let matrix = HeuristicMatrix::build(&self.beam);
        self.selection = select(&matrix, &self.beam, self.best_index);
        self.best_index = self.selection.best_index;
        self.selected = self.selection.pick_all(&mut self.rng);
    }

    fn note_solution(&mut self) {
        if self.is_solved() {
            self.statistics.increment_counter(Counters::Solutions);
            info!(
                step_count = self.step_count,
                solution = %self.beam[self.best_index],
                "solution found"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::QUEEN_COUNT;

    fn engine(seed: u64) -> BeamEngine {
        BeamEngine::new(EngineConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn test_new_has_configured_width() {
        let engine = BeamEngine::new(EngineConfig::default().with_seed(1).with_beam_width(5)).unwrap();
        assert_eq!(engine.beam().len(), 5);
        assert_eq!(engine.selected_moves().len(), 5);
        assert_eq!(engine.step_count(), 0);
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = BeamEngine::new(EngineConfig::default().with_beam_width(0));
        assert!(matches!(result, Err(EngineError::InvalidBeamWidth { width: 0 })));
    }

    #[test]
    fn test_too_many_seed_states_rejected() {
        let states = vec![State::new([0; QUEEN_COUNT]).unwrap(); 4];
        let result = BeamEngine::initialize(EngineConfig::default().with_seed(1), &states);
        assert!(matches!(
            result,
            Err(EngineError::SeedStateCount { expected: 3, got: 4 })
        ));
    }

    #[test]
    fn test_seed_state_is_first_member() {
        let seed = State::new([0; QUEEN_COUNT]).unwrap();
        let engine = BeamEngine::initialize(EngineConfig::default().with_seed(2), &[seed]).unwrap();
        assert_eq!(engine.beam()[0], seed);
        assert_eq!(engine.snapshot().previous_state, seed);
    }

    #[test]
    fn test_step_commits_selected_move_of_best() {
        let mut engine = engine(3);
        if engine.is_solved() {
            return;
        }
        let before = engine.snapshot();
        let Some(mv) = before.best_selected() else {
            return;
        };
        let best = before.best_index;

        let after = engine.step();

        assert_eq!(after.step_count, 1);
        assert_eq!(after.previous_state, before.beam[best]);
        assert_eq!(after.beam[best].row(mv.column), mv.row);
        assert_eq!(after.conflicts[best], before.min_scores[best]);
        for k in 0..before.beam.len() {
            if k != best {
                assert_eq!(after.beam[k], before.beam[k]);
            }
        }
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = engine(4);
        let mut b = engine(4);
        for _ in 0..20 {
            assert_eq!(a.step(), b.step());
        }
    }

    #[test]
    fn test_run_without_bound_is_refused() {
        let mut engine =
            BeamEngine::new(EngineConfig::default().with_seed(5).with_sweep_limit(None)).unwrap();
        let before = engine.snapshot();
        assert_eq!(engine.run_to_completion(None), Err(EngineError::UnboundedRun));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_run_respects_bound() {
        for seed in 0..10 {
            let mut engine = engine(seed);
            let report = engine.run_to_completion(Some(3)).unwrap();
            assert!(report.sweeps <= 3);
            assert!(report.solved || report.stalled || report.sweeps == 3);
            assert_eq!(report.solved, report.snapshot.is_solved());
        }
    }

    #[test]
    fn test_reset_zeroes_steps() {
        let mut engine = engine(6);
        engine.step();
        engine.step();
        let snapshot = engine.reset();
        assert_eq!(snapshot.step_count, 0);
        assert_eq!(snapshot.beam.len(), 3);
        assert_eq!(snapshot.previous_state, snapshot.beam[0]);
        assert_eq!(engine.statistics().get(Counters::Resets), 1);
    }

    #[test]
    fn test_missing_move_is_noop() {
        let mut engine = engine(9);
        let best = engine.best_index();
        engine.selected[best] = None;
        if engine.is_solved() {
            return;
        }
        let before = engine.snapshot();
        let after = engine.step();
        assert_eq!(after, before);
        assert_eq!(engine.statistics().get(Counters::MissingMoves), 1);
    }

    #[test]
    fn test_identity_move_rejected_without_corruption() {
        let mut engine = engine(10);
        let best = engine.best_index();
        let column = 0;
        let row = engine.beam()[best].row(column);
        let before = engine.beam().to_vec();

        assert!(!engine.commit(best, Move::new(column, row)));
        assert_eq!(engine.beam(), &before[..]);
        assert_eq!(engine.statistics().get(Counters::MovesApplied), 0);
    }
}
