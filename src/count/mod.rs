//! Parallel word-frequency counting
//!
//! This module implements the counting pipeline: a document is partitioned
//! into chunks, each chunk is counted by a pure mapper on a bounded worker
//! pool, and the partial counts are merged in chunk order into one ranked
//! frequency table. Data flows strictly forward; the coordinator is the only
//! effectful component.

pub mod coordinator;
pub mod errors;
pub mod mapper;
pub mod partition;
pub mod reduce;

// Re-export main types for convenience
pub use coordinator::count;
pub use errors::{CountError, CountResult};
pub use mapper::map_chunk;
pub use partition::{split_chunks, Chunk};
pub use reduce::{merge_counts, rank};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of entries retained in the ranked output.
pub const TOP_ENTRIES: usize = 20;

/// Word frequencies, iterated in first-encounter order.
///
/// Insertion order is what makes tie-breaking in the ranked output
/// deterministic: equal counts stay in the order the words first appeared.
pub type WordCount = IndexMap<String, u64>;

/// A single entry in the ranked output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The word, case-sensitive with punctuation retained
    pub word: String,
    /// Total occurrences across the whole document
    pub count: u64,
}
