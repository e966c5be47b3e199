//! Coordinator for parallel counting jobs
//!
//! Owns the worker pool for the map phase, enforces the barrier between map
//! and reduce, and reassembles partial counts in chunk order so the ranked
//! output is deterministic regardless of worker scheduling.

use super::errors::{CountError, CountResult};
use super::partition::Chunk;
use super::{mapper, partition, reduce, RankedEntry, WordCount, TOP_ENTRIES};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

/// Count word frequencies in `text` using `workers` parallel mappers.
///
/// Returns the top [`TOP_ENTRIES`] words by count descending, ties ordered by
/// first appearance in the text. Empty input is valid and yields an empty
/// result. Fails with [`CountError::InvalidWorkerCount`] before any work when
/// `workers` is zero, and with [`CountError::WorkerFailure`] naming the
/// failing chunk when any mapper task dies; no partial result is returned and
/// nothing is retried.
pub async fn count(text: &str, workers: usize) -> CountResult<Vec<RankedEntry>> {
    if workers == 0 {
        return Err(CountError::InvalidWorkerCount { workers });
    }

    let chunks = partition::split_chunks(text, workers);
    info!(
        "Executing map phase with {} chunks (max parallel: {})",
        chunks.len(),
        workers
    );

    let document: Arc<str> = Arc::from(text);
    let partials = run_map_phase(document, chunks, workers, mapper::map_chunk).await?;

    debug!("Map phase complete, reducing {} partial counts", partials.len());
    let aggregate = reduce::merge_counts(partials);
    Ok(reduce::rank(aggregate, TOP_ENTRIES))
}

/// Run the map phase: one task per chunk, execution bounded by a semaphore
/// sized to `workers`, results reassembled in chunk order.
///
/// Generic over the mapper so tests can inject failing mappers. Each task
/// receives its own chunk of the shared immutable document and returns its
/// own count; there is no cross-task mutable state.
async fn run_map_phase<F>(
    document: Arc<str>,
    chunks: Vec<Chunk>,
    workers: usize,
    map_fn: F,
) -> CountResult<Vec<WordCount>>
where
    F: Fn(&str) -> WordCount + Send + Sync + 'static,
{
    let semaphore = Arc::new(Semaphore::new(workers));
    let map_fn = Arc::new(map_fn);
    let mut handles: Vec<(usize, JoinHandle<WordCount>)> = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        let document = Arc::clone(&document);
        let semaphore = Arc::clone(&semaphore);
        let map_fn = Arc::clone(&map_fn);
        let index = chunk.index;

        handles.push((
            index,
            tokio::spawn(async move {
                // Chunks beyond the pool size queue here for a free worker.
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("map phase semaphore closed");
                debug!("Mapping chunk {} ({} bytes)", index, chunk.range.len());
                map_fn(&document[chunk.range])
            }),
        ));
    }

    // Barrier: every mapper must finish before the reduce phase may start.
    // Awaiting handles in submission order also restores chunk order no
    // matter which tasks complete first.
    let mut remaining = handles.into_iter();
    let mut partials = Vec::with_capacity(remaining.len());
    while let Some((chunk_index, handle)) = remaining.next() {
        match handle.await {
            Ok(counts) => partials.push(counts),
            Err(err) => {
                for (_, live) in remaining.by_ref() {
                    live.abort();
                }
                return Err(CountError::WorkerFailure {
                    chunk_index,
                    reason: failure_reason(err),
                });
            }
        }
    }

    Ok(partials)
}

/// Extract a readable failure reason from a dead mapper task.
fn failure_reason(err: JoinError) -> String {
    if err.is_panic() {
        let payload = err.into_panic();
        if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_string()
        } else {
            "mapper panicked".to_string()
        }
    } else {
        "mapper task was cancelled".to_string()
    }
}
