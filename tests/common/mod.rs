// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use queens_beam::{BeamEngine, EngineConfig, State, QUEEN_COUNT};

/// Engine with the default beam width and a fixed seed.
pub fn seeded_engine(seed: u64) -> BeamEngine {
    BeamEngine::new(EngineConfig::default().with_seed(seed))
        .expect("default config is valid")
}

/// Every (column, row) cell of the board, column-major.
pub fn all_cells() -> impl Iterator<Item = (usize, usize)> {
    (0..QUEEN_COUNT).flat_map(|column| (0..QUEEN_COUNT).map(move |row| (column, row)))
}

/// Run seeds until one reaches a solution within `limit` sweeps.
pub fn solved_engine(limit: usize) -> BeamEngine {
    for seed in 0..1000 {
        let mut engine = seeded_engine(seed);
        let report = engine.run_to_completion(Some(limit)).unwrap();
        if report.solved {
            return engine;
        }
    }
    panic!("no seed in 0..1000 solved within {} sweeps", limit);
}

pub fn state(rows: [usize; QUEEN_COUNT]) -> State {
    State::new(rows).expect("rows on the board")
}
