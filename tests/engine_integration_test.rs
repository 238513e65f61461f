// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end behavior of the beam engine: stepping, running, resetting.

mod common;

use common::{seeded_engine, solved_engine};
use queens_beam::engine::Counters;
use queens_beam::{conflicts, BeamEngine, EngineConfig, EngineError};

#[test]
fn test_solved_state_is_idempotent_under_step() {
    let mut engine = solved_engine(500);
    let before = engine.snapshot();
    assert!(before.is_solved());

    for _ in 0..5 {
        let after = engine.step();
        assert_eq!(after.beam, before.beam);
        assert_eq!(after.step_count, before.step_count);
    }
    assert_eq!(engine.statistics().get(Counters::SolvedNoOps), 5);
}

#[test]
fn test_run_on_solved_beam_does_nothing() {
    let mut engine = solved_engine(500);
    let before = engine.snapshot();
    let report = engine.run_to_completion(Some(10)).unwrap();
    assert_eq!(report.sweeps, 0);
    assert!(report.solved);
    assert_eq!(report.snapshot.beam, before.beam);
}

#[test]
fn test_committed_move_never_worsens_member() {
    for seed in 0..25 {
        let mut engine = seeded_engine(seed);
        for _ in 0..30 {
            let before = engine.snapshot();
            if before.is_solved() {
                break;
            }
            let best = before.best_index;
            let after = engine.step();
            if after.step_count == before.step_count {
                continue;
            }
            assert!(after.conflicts[best] <= before.min_scores[best]);
            assert!(before.min_scores[best] <= before.conflicts[best]);
        }
    }
}

#[test]
fn test_sweep_moves_every_member_with_a_move() {
    let mut engine = seeded_engine(31);
    if engine.is_solved() {
        return;
    }
    let before = engine.snapshot();
    let report = engine.run_to_completion(Some(1)).unwrap();
    let moved = before.selected.iter().filter(|m| m.is_some()).count();

    assert_eq!(report.sweeps, usize::from(moved > 0));
    assert_eq!(report.snapshot.step_count, moved);
    for (k, mv) in before.selected.iter().enumerate() {
        match mv {
            Some(mv) => {
                assert_eq!(report.snapshot.beam[k].row(mv.column), mv.row);
                assert_eq!(report.snapshot.conflicts[k], before.min_scores[k]);
            }
            None => assert_eq!(report.snapshot.beam[k], before.beam[k]),
        }
    }
}

#[test]
fn test_run_never_exceeds_sweep_limit() {
    for seed in 0..20 {
        for limit in [0, 1, 5, 50] {
            let mut engine = seeded_engine(seed);
            let report = engine.run_to_completion(Some(limit)).unwrap();
            assert!(report.sweeps <= limit);
            assert_eq!(engine.statistics().get(Counters::Sweeps), report.sweeps as u64);
        }
    }
}

#[test]
fn test_configured_limit_used_when_call_gives_none() {
    let mut engine =
        BeamEngine::new(EngineConfig::default().with_seed(3).with_sweep_limit(Some(2))).unwrap();
    let report = engine.run_to_completion(None).unwrap();
    assert!(report.sweeps <= 2);
}

#[test]
fn test_unbounded_run_is_a_configuration_error() {
    let mut engine =
        BeamEngine::new(EngineConfig::default().with_seed(3).with_sweep_limit(None)).unwrap();
    assert_eq!(
        engine.run_to_completion(None),
        Err(EngineError::UnboundedRun)
    );
    assert!(engine.run_to_completion(Some(1)).is_ok());
}

#[test]
fn test_reset_restores_width_and_step_count() {
    for width in [1, 3, 7] {
        let mut engine =
            BeamEngine::new(EngineConfig::default().with_seed(width as u64).with_beam_width(width))
                .unwrap();
        engine.run_to_completion(Some(20)).unwrap();
        let snapshot = engine.reset();
        assert_eq!(snapshot.beam.len(), width);
        assert_eq!(snapshot.step_count, 0);
        assert_eq!(snapshot.previous_state, snapshot.beam[0]);
    }
}

#[test]
fn test_snapshot_consistent_with_beam() {
    let mut engine = seeded_engine(17);
    for _ in 0..10 {
        let snapshot = engine.step();
        assert_eq!(snapshot.beam.len(), snapshot.conflicts.len());
        for (state, &count) in snapshot.beam.iter().zip(&snapshot.conflicts) {
            assert_eq!(conflicts(state), count);
        }
        for (k, mv) in snapshot.selected.iter().enumerate() {
            match mv {
                Some(mv) => assert!(snapshot.candidates[k].contains(mv)),
                None => assert!(snapshot.candidates[k].is_empty()),
            }
        }
        let min = *snapshot.min_scores.iter().min().unwrap();
        assert_eq!(snapshot.best_score(), min);
    }
}

#[test]
fn test_previous_state_tracks_the_committed_step() {
    for seed in 0..200 {
        let mut engine = seeded_engine(seed);
        for _ in 0..3 {
            engine.step();
        }
        let before = engine.snapshot();
        let after = engine.step();
        if after.step_count == before.step_count {
            // Solved or no move: nothing committed, so nothing may change.
            assert_eq!(after, before);
        } else {
            assert_eq!(after.previous_state, before.beam[before.best_index]);
            assert_ne!(after.previous_state, after.beam[before.best_index]);
        }
    }
}

#[test]
fn test_stalled_or_solved_run_keeps_previous_state() {
    let mut engine = solved_engine(500);
    let before = engine.snapshot();
    let report = engine.run_to_completion(Some(5)).unwrap();
    assert_eq!(report.snapshot.previous_state, before.previous_state);
}

#[test]
fn test_same_seed_reproduces_run() {
    let mut a = seeded_engine(99);
    let mut b = seeded_engine(99);
    assert_eq!(
        a.run_to_completion(Some(100)).unwrap(),
        b.run_to_completion(Some(100)).unwrap()
    );
    assert_eq!(a.reset(), b.reset());
}
