// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine configuration, fixed at construction.

use crate::board::{DEFAULT_BEAM_WIDTH, DEFAULT_SWEEP_LIMIT};
use crate::error::{EngineError, Result};

/// Beam search engine configuration.
///
/// The board size is a compile-time constant, see
/// [`QUEEN_COUNT`](crate::board::QUEEN_COUNT).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Beam width (number of states tracked in parallel).
    pub beam_width: usize,

    /// Sweep bound used by `run_to_completion` when the call gives none.
    ///
    /// `None` means the caller must always pass a bound.
    pub sweep_limit: Option<usize>,

    /// Seed for the engine's random source. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            beam_width: DEFAULT_BEAM_WIDTH,
            sweep_limit: Some(DEFAULT_SWEEP_LIMIT),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.beam_width = beam_width;
        self
    }

    pub fn with_sweep_limit(mut self, sweep_limit: Option<usize>) -> Self {
        self.sweep_limit = sweep_limit;
        self
    }

    /// Check the configuration before an engine is built.
    pub fn validate(&self) -> Result<()> {
        if self.beam_width == 0 {
            return Err(EngineError::InvalidBeamWidth {
                width: self.beam_width,
            });
        }
        Ok(())
    }
}
