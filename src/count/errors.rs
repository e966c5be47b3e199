//! Structured error types for counting jobs
//!
//! Failures surface to the immediate caller with enough context to identify
//! what went wrong; none are swallowed and nothing is retried.

use thiserror::Error;

/// Main error type for counting jobs
#[derive(Debug, Error)]
pub enum CountError {
    #[error("Invalid worker count {workers}: at least one worker is required")]
    InvalidWorkerCount { workers: usize },

    #[error("Map worker for chunk {chunk_index} failed: {reason}")]
    WorkerFailure { chunk_index: usize, reason: String },
}

/// Result type alias for counting operations
pub type CountResult<T> = Result<T, CountError>;
