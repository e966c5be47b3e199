//! Pure per-chunk word counting
//!
//! The mapper is a pure function with no shared state, which is what makes
//! concurrent invocation safe without locking.

use super::WordCount;

/// Pure: Count word occurrences within one chunk.
///
/// Tokenizes on runs of Unicode whitespace; tokens are case-sensitive and
/// keep their punctuation. Empty and whitespace-only chunks yield an empty
/// count. Words are recorded in first-encounter order.
pub fn map_chunk(chunk: &str) -> WordCount {
    let mut counts = WordCount::new();
    for word in chunk.split_whitespace() {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}
