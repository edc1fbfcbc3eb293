//! Harness configuration.
//!
//! The defaults are compiled in; the `seqbench` binary may override them from
//! its command line. Nothing is read from the environment or from files.

use serde::Serialize;

use seqbench_core::SeqError;

use crate::error::HarnessError;

/// Sizes measured when none are given.
pub const DEFAULT_SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];

/// Repetitions averaged per cell when none are given.
pub const DEFAULT_RUNS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarnessConfig {
    /// Sequence sizes, measured in the order given.
    pub sizes: Vec<usize>,
    /// Repetitions per (size, implementation) cell.
    pub runs: u32,
    /// Seed for the global value source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Reject configurations the harness cannot measure.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.sizes.is_empty() {
            return Err(HarnessError::EmptySizes);
        }
        if let Some(&size) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(SeqError::InvalidSize { size }.into());
        }
        if self.runs == 0 {
            return Err(HarnessError::InvalidRunCount { runs: self.runs });
        }
        Ok(())
    }

    /// Number of cells the configuration will measure.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.sizes.len() * seqbench_core::SeqKind::COUNT
    }
}
