//! Restoring dictionary matches from placeholder-marked text.
//!
//! The marked buffer is chunked like ordinary text. Chunks without
//! placeholders pass through, placeholder chunks are replaced by the recorded
//! words they cover, and chunks mixing both are split into homogeneous runs
//! first.

use std::collections::VecDeque;

use crate::char_categories::SENTINEL;
use crate::chunker::{Chunk, Chunker};
use crate::error::ReassemblyError;
use crate::scanner::MatchRecord;
use crate::token::{ChunkType, Word};

/// Rebuild the ordered word list from a marked buffer and its match records.
///
/// `records` must be sorted by offset, as [`MatchScanner::scan`] returns them.
///
/// [`MatchScanner::scan`]: crate::scanner::MatchScanner::scan
pub fn reassemble(
    marked: &[char],
    records: Vec<MatchRecord>,
) -> Result<Vec<Word>, ReassemblyError> {
    let chunker = Chunker::from_chars(marked);
    let mut queue: VecDeque<MatchRecord> = records.into();
    let mut words = Vec::new();

    // Worklist of (chunk, split depth); a mixed chunk is split once into
    // homogeneous runs, so depth never exceeds one.
    let mut work: Vec<(Chunk, u8)> = chunker
        .make_chunks()
        .into_iter()
        .rev()
        .map(|c| (c, 0))
        .collect();

    while let Some((chunk, depth)) = work.pop() {
        let text = &marked[chunk.start..chunk.end()];
        let placeholders = text.iter().filter(|c| **c == SENTINEL).count();

        if placeholders == 0 {
            if !text.is_empty() {
                words.push(Word::literal(
                    text.iter().collect(),
                    chunk.start,
                    chunk.len,
                    chunk.chunk_type,
                ));
            }
        } else if placeholders == text.len() {
            for record in consume(&mut queue, chunk.len)? {
                debug_assert!(record.start >= chunk.start && record.start < chunk.end());
                words.push(Word::dictionary(record.word, record.start, record.len));
            }
        } else {
            debug_assert_eq!(depth, 0, "split runs are homogeneous");
            for run in split_runs(marked, &chunk).into_iter().rev() {
                work.push((run, depth + 1));
            }
        }
    }

    if !queue.is_empty() {
        return Err(ReassemblyError::Unconsumed(queue.len()));
    }

    Ok(words)
}

/// Pop records off the front of the queue until they cover exactly `needed`
/// placeholder characters.
fn consume(
    queue: &mut VecDeque<MatchRecord>,
    needed: usize,
) -> Result<Vec<MatchRecord>, ReassemblyError> {
    let mut consumed = 0;
    let mut taken = Vec::new();

    while consumed < needed {
        let record = queue
            .pop_front()
            .ok_or(ReassemblyError::QueueExhausted { needed, consumed })?;
        consumed += record.len;
        taken.push(record);
    }

    if consumed > needed {
        return Err(ReassemblyError::Overrun { needed, consumed });
    }

    Ok(taken)
}

/// Split a mixed chunk at every boundary between placeholder and literal
/// characters, then re-chunk the literal runs.
fn split_runs(marked: &[char], chunk: &Chunk) -> Vec<Chunk> {
    let mut runs = Vec::new();
    let mut start = chunk.start;

    while start < chunk.end() {
        let is_placeholder = marked[start] == SENTINEL;
        let mut end = start + 1;
        while end < chunk.end() && (marked[end] == SENTINEL) == is_placeholder {
            end += 1;
        }

        if is_placeholder {
            runs.push(Chunk::new(ChunkType::Placeholder, start, end - start));
        } else {
            let literal = Chunker::from_chars(&marked[start..end]);
            runs.extend(
                literal
                    .make_chunks()
                    .into_iter()
                    .map(|c| Chunk::new(c.chunk_type, start + c.start, c.len)),
            );
        }
        start = end;
    }

    runs
}
