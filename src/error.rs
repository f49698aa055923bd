use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the sieve.
///
/// Configuration errors are rejected before any sieving work starts. An
/// allocation failure aborts the current sieve call; bucket slabs allocated
/// so far are released when the engine is dropped.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("sieve size must be a power of two in [{min}, {max}] bytes, got {got}")]
    InvalidSieveSize { got: usize, min: usize, max: usize },

    #[error("pre-sieve bound must be one of 13, 17 or 19, got {0}")]
    InvalidPreSieve(u32),

    #[error("stop must be <= {max}, got {stop}")]
    StopOutOfRange { stop: u64, max: u64 },

    #[error("failed to allocate bucket memory")]
    Allocation(#[from] TryReserveError),

    #[error("internal invariant violated: {0}")]
    Invariant(&'static str),
}

pub type Result<T> = std::result::Result<T, SieveError>;
