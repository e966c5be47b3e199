//! Pure document partitioning for the map phase
//!
//! Splits a document into contiguous, non-overlapping byte ranges without
//! copying. Cut points start at the fixed stride `len / num_chunks` and
//! advance to the next whitespace character, so a token is never bisected and
//! per-word totals are independent of the chunk count.

use std::ops::Range;

/// A contiguous slice of the document assigned to one mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk in the document, used to reassemble partial
    /// counts in submission order
    pub index: usize,
    /// Byte range into the document; always begins and ends on a UTF-8
    /// character boundary
    pub range: Range<usize>,
}

/// Pure: Split `text` into at most `num_chunks` contiguous chunks.
///
/// The result has fewer chunks when `num_chunks` exceeds what is useful
/// (more chunks than characters, or long stretches without whitespace);
/// empty chunks are never emitted and the call never fails. The final chunk
/// absorbs the remainder of the fixed stride. Deterministic for identical
/// inputs.
pub fn split_chunks(text: &str, num_chunks: usize) -> Vec<Chunk> {
    if num_chunks == 0 || text.is_empty() {
        return Vec::new();
    }

    let stride = text.len() / num_chunks;
    let mut chunks = Vec::with_capacity(num_chunks);
    let mut start = 0;

    for nth in 1..num_chunks {
        let target = stride * nth;
        if target <= start {
            continue;
        }
        let end = whitespace_cut(text, target);
        if end > start {
            chunks.push(Chunk {
                index: chunks.len(),
                range: start..end,
            });
            start = end;
        }
    }

    if start < text.len() {
        chunks.push(Chunk {
            index: chunks.len(),
            range: start..text.len(),
        });
    }

    chunks
}

/// Pure: Find the first safe cut point at or after `target`.
///
/// A cut is safe at the start of a whitespace character: the token before it
/// stays whole in the current chunk and the token after it stays whole in the
/// next. Returns `text.len()` when no whitespace follows `target`.
fn whitespace_cut(text: &str, target: usize) -> usize {
    let mut aligned = target;
    while aligned < text.len() && !text.is_char_boundary(aligned) {
        aligned += 1;
    }
    match text[aligned..].find(|c: char| c.is_whitespace()) {
        Some(offset) => aligned + offset,
        None => text.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_texts<'a>(text: &'a str, chunks: &[Chunk]) -> Vec<&'a str> {
        chunks.iter().map(|c| &text[c.range.clone()]).collect()
    }

    #[test]
    fn test_split_cuts_on_whitespace() {
        let text = "the quick brown fox the lazy dog the";
        let chunks = split_chunks(text, 2);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunk_texts(text, &chunks), vec![
            "the quick brown fox",
            " the lazy dog the",
        ]);
    }

    #[test]
    fn test_chunks_cover_document_contiguously() {
        let text = "one two three four five six seven eight nine ten";
        for num_chunks in 1..=text.len() {
            let chunks = split_chunks(text, num_chunks);
            assert!(chunks.len() <= num_chunks);

            let mut expected_start = 0;
            for (i, chunk) in chunks.iter().enumerate() {
                assert_eq!(chunk.index, i);
                assert_eq!(chunk.range.start, expected_start);
                assert!(chunk.range.end > chunk.range.start);
                expected_start = chunk.range.end;
            }
            assert_eq!(expected_start, text.len());
        }
    }

    #[test]
    fn test_cut_points_never_bisect_tokens() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let whole: Vec<&str> = text.split_whitespace().collect();
        for num_chunks in 1..=text.len() {
            let chunks = split_chunks(text, num_chunks);
            let rejoined: Vec<&str> = chunks
                .iter()
                .flat_map(|c| text[c.range.clone()].split_whitespace())
                .collect();
            assert_eq!(rejoined, whole, "tokens changed at {} chunks", num_chunks);
        }
    }

    #[test]
    fn test_more_chunks_than_bytes_yields_fewer_chunks() {
        let text = "ab";
        let chunks = split_chunks(text, 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].range, 0..2);
    }

    #[test]
    fn test_unbroken_text_collapses_to_one_chunk() {
        let text = "supercalifragilisticexpialidocious";
        let chunks = split_chunks(text, 4);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].range, 0..text.len());
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(split_chunks("", 3).is_empty());
    }

    #[test]
    fn test_zero_chunks_yields_no_chunks() {
        assert!(split_chunks("some text", 0).is_empty());
    }

    #[test]
    fn test_multibyte_characters_stay_whole() {
        let text = "héllo wörld naïve café résumé über";
        for num_chunks in 1..=8 {
            for chunk in split_chunks(text, num_chunks) {
                // Slicing panics off a char boundary, so get() doubles as the
                // boundary check.
                assert!(text.get(chunk.range.clone()).is_some());
            }
        }
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let text = "repeatable input text for chunking";
        assert_eq!(split_chunks(text, 3), split_chunks(text, 3));
    }
}
