//! Word representation for segmented Myanmar text.
//!
//! A Word is one unit of the segmenter's output: either a dictionary match
//! restored from its placeholder, or a literal token passed through unchanged.

use serde::{Deserialize, Serialize};

/// The type of chunk/word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChunkType {
    /// Myanmar text
    #[default]
    Text,
    /// Punctuation
    Punct,
    /// Number
    Num,
    /// Myanmar symbol
    Sym,
    /// Latin text
    Latin,
    /// Text claimed by dictionary matches
    Placeholder,
    /// Other/unknown
    Other,
}

impl ChunkType {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkType::Text => "TEXT",
            ChunkType::Punct => "PUNCT",
            ChunkType::Num => "NUM",
            ChunkType::Sym => "SYM",
            ChunkType::Latin => "LATIN",
            ChunkType::Placeholder => "PLACEHOLDER",
            ChunkType::Other => "OTHER",
        }
    }
}

/// Where a word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WordSource {
    /// Restored from a dictionary match
    Dictionary,
    /// Passed through from the chunker
    #[default]
    Literal,
}

/// A single word of segmented output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The word text
    pub text: String,

    /// Starting offset, in characters of the sanitized input
    pub start: usize,

    /// Length in characters
    pub len: usize,

    /// The type of this word
    pub chunk_type: ChunkType,

    /// Whether the word is a dictionary match
    pub source: WordSource,

    /// Document frequency from the lexicon (dictionary matches only)
    pub freq: Option<u64>,
}

impl Word {
    /// Create a literal word
    pub fn literal(text: String, start: usize, len: usize, chunk_type: ChunkType) -> Self {
        Word {
            text,
            start,
            len,
            chunk_type,
            source: WordSource::Literal,
            freq: None,
        }
    }

    /// Create a dictionary word
    pub fn dictionary(text: String, start: usize, len: usize) -> Self {
        Word {
            text,
            start,
            len,
            chunk_type: ChunkType::Text,
            source: WordSource::Dictionary,
            freq: None,
        }
    }

    /// Check if this word came from the lexicon
    pub fn is_match(&self) -> bool {
        self.source == WordSource::Dictionary
    }

    /// Check if this is punctuation
    pub fn is_punct(&self) -> bool {
        self.chunk_type == ChunkType::Punct
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
