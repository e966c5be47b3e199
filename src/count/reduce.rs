//! Pure reduction of partial counts
//!
//! Folds per-chunk counts into a single aggregate and ranks it. Per-word
//! totals are independent of merge order; traversal order only determines
//! where ties land in the ranked output, so the coordinator always passes
//! partials in chunk order.

use super::{RankedEntry, WordCount};

/// Pure: Merge partial counts into one aggregate, summing per word.
///
/// Partials are folded in sequence order; words enter the aggregate in
/// first-encounter order across that traversal. An empty sequence yields an
/// empty aggregate.
pub fn merge_counts<I>(partials: I) -> WordCount
where
    I: IntoIterator<Item = WordCount>,
{
    let mut aggregate = WordCount::new();
    for partial in partials {
        for (word, count) in partial {
            *aggregate.entry(word).or_insert(0) += count;
        }
    }
    aggregate
}

/// Pure: Rank an aggregate by count descending, truncated to `limit` entries.
///
/// The sort is stable, so words with equal counts keep their first-encounter
/// order from the aggregate.
pub fn rank(aggregate: WordCount, limit: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = aggregate
        .into_iter()
        .map(|(word, count)| RankedEntry { word, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}
