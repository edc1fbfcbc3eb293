//! Harness error type.

use seqbench_core::SeqError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Sequence(#[from] SeqError),
    #[error("invalid run count: {runs} (must be positive)")]
    InvalidRunCount { runs: u32 },
    #[error("no test sizes configured")]
    EmptySizes,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
