//! Dictionary matching with in-place placeholders.
//!
//! Words are tried in lexicon order. Every accepted occurrence is overwritten
//! with the same number of [`SENTINEL`] characters, so offsets never shift and
//! later words cannot match inside a claimed span. The matched word and its
//! offset are kept in a [`MatchRecord`] for the reassembler.

use tracing::trace;

use crate::char_categories::{SENTINEL, VIRAMA};
use crate::lexicon::Lexicon;
use crate::syllable::SyllableBreak;

/// A dictionary word claimed from the working buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// The matched word
    pub word: String,
    /// Offset of the first character in the sanitized input
    pub start: usize,
    /// Length in characters
    pub len: usize,
}

/// Marks dictionary words in a working buffer
pub struct MatchScanner<'a> {
    lexicon: &'a Lexicon,
    breaks: &'a dyn SyllableBreak,
}

impl<'a> MatchScanner<'a> {
    /// Create a new scanner
    pub fn new(lexicon: &'a Lexicon, breaks: &'a dyn SyllableBreak) -> Self {
        MatchScanner { lexicon, breaks }
    }

    /// Mark every accepted match in `buffer` and return the records ordered
    /// by offset. The buffer keeps its length.
    pub fn scan(&self, buffer: &mut [char]) -> Vec<MatchRecord> {
        let mut records = Vec::new();

        for entry in self.lexicon.entries() {
            let word = entry.chars.as_slice();
            if word.is_empty() || word.len() > buffer.len() {
                continue;
            }

            for start in find_occurrences(buffer, word) {
                if start > 0 && buffer[start - 1] == VIRAMA {
                    trace!(word = %entry.word, start, "rejected: follows virama");
                    continue;
                }
                if !self.breaks.is_valid_break(&buffer[start..], word.len()) {
                    trace!(word = %entry.word, start, "rejected: not a syllable boundary");
                    continue;
                }

                buffer[start..start + word.len()].fill(SENTINEL);
                records.push(MatchRecord {
                    word: entry.word.clone(),
                    start,
                    len: word.len(),
                });
            }
        }

        // Spans are disjoint, so offsets are unique
        records.sort_by_key(|r| r.start);
        records
    }
}

/// Left-to-right, non-overlapping occurrences of `needle` in `haystack`.
///
/// Occurrences are collected before any of them is claimed. They do not
/// overlap, so claiming one leaves the others intact.
fn find_occurrences(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut found = Vec::new();
    let first = needle[0];
    let mut i = 0;

    while i + needle.len() <= haystack.len() {
        if haystack[i] == first && haystack[i..i + needle.len()] == *needle {
            found.push(i);
            i += needle.len();
        } else {
            i += 1;
        }
    }

    found
}
