//! Low-level tokenization of Myanmar text.
//!
//! The chunker splits a codepoint buffer on whitespace and punctuation. Every
//! punctuation run becomes its own chunk, every other maximal run becomes one
//! chunk, and whitespace is dropped. Concatenating the chunks and the dropped
//! whitespace reproduces the input.

use crate::char_categories::{CharCategory, MyString};
use crate::token::ChunkType;

/// A chunk of text with its type and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// The type of this chunk
    pub chunk_type: ChunkType,
    /// Starting offset, in characters
    pub start: usize,
    /// Length in characters
    pub len: usize,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(chunk_type: ChunkType, start: usize, len: usize) -> Self {
        Chunk {
            chunk_type,
            start,
            len,
        }
    }

    /// Offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Chunker for Myanmar text
pub struct Chunker {
    /// The analyzed string
    ms: MyString,
}

impl Chunker {
    /// Create a new chunker for the given string
    pub fn new(text: &str) -> Self {
        Chunker {
            ms: MyString::new(text),
        }
    }

    /// Create a new chunker over a codepoint buffer
    pub fn from_chars(chars: &[char]) -> Self {
        Chunker {
            ms: MyString::from_chars(chars.to_vec()),
        }
    }

    /// Get the analyzed characters
    pub fn chars(&self) -> &[char] {
        &self.ms.chars
    }

    /// Get the text of a chunk
    pub fn chunk_text(&self, chunk: &Chunk) -> String {
        self.ms.chars[chunk.start..chunk.end()].iter().collect()
    }

    /// Chunk the text into words, punctuation, etc.
    pub fn make_chunks(&self) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let cats = &self.ms.categories;
        let mut i = 0;

        while i < cats.len() {
            let cat = cats[i];

            if cat == CharCategory::Transparent {
                i += 1;
                continue;
            }

            let start = i;
            if cat.is_punct() {
                while i < cats.len() && cats[i].is_punct() {
                    i += 1;
                }
                chunks.push(Chunk::new(ChunkType::Punct, start, i - start));
            } else {
                while i < cats.len() && cats[i] != CharCategory::Transparent && !cats[i].is_punct()
                {
                    i += 1;
                }
                let chunk_type = classify(&cats[start..i]);
                chunks.push(Chunk::new(chunk_type, start, i - start));
            }
        }

        chunks
    }

    /// Tokenize into strings
    pub fn tokens(&self) -> Vec<String> {
        self.make_chunks()
            .iter()
            .map(|chunk| self.chunk_text(chunk))
            .collect()
    }
}

/// Tokenize a string, dropping whitespace
pub fn tokenize(text: &str) -> Vec<String> {
    Chunker::new(text).tokens()
}

/// Decide the chunk type of a run free of whitespace and punctuation
fn classify(cats: &[CharCategory]) -> ChunkType {
    if cats.iter().all(|c| *c == CharCategory::Sentinel) {
        return ChunkType::Placeholder;
    }

    let mut rest = cats.iter().filter(|c| **c != CharCategory::Sentinel);
    if cats
        .iter()
        .any(|c| c.is_syllable_start() || c.is_dependent() || *c == CharCategory::Extended)
    {
        ChunkType::Text
    } else if rest
        .clone()
        .all(|c| matches!(c, CharCategory::Digit | CharCategory::LatinDigit))
    {
        ChunkType::Num
    } else if rest
        .clone()
        .all(|c| matches!(c, CharCategory::Latin | CharCategory::LatinDigit))
    {
        ChunkType::Latin
    } else if rest.all(|c| *c == CharCategory::Symbol) {
        ChunkType::Sym
    } else {
        ChunkType::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_categories::SENTINEL;

    #[test]
    fn test_split_on_space_and_punct() {
        let tokens = tokenize("မင်္ဂလာပါ ခင်ဗျား။");
        assert_eq!(tokens, vec!["မင်္ဂလာပါ", "ခင်ဗျား", "။"]);
    }

    #[test]
    fn test_chunk_types() {
        let chunker = Chunker::new("ကား ၁၂၃ Power ၊");
        let chunks = chunker.make_chunks();
        let types: Vec<ChunkType> = chunks.iter().map(|c| c.chunk_type).collect();
        assert_eq!(
            types,
            vec![
                ChunkType::Text,
                ChunkType::Num,
                ChunkType::Latin,
                ChunkType::Punct
            ]
        );
        assert_eq!(chunks[1].start, 4);
        assert_eq!(chunks[1].len, 3);
    }

    #[test]
    fn test_placeholder_chunks() {
        let marked: Vec<char> = vec![SENTINEL, SENTINEL, ' ', SENTINEL, 'က'];
        let chunker = Chunker::from_chars(&marked);
        let chunks = chunker.make_chunks();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_type, ChunkType::Placeholder);
        assert_eq!(chunks[1].chunk_type, ChunkType::Text);
        assert_eq!(chunks[1].start, 3);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t").is_empty());
    }

    #[test]
    fn test_reconstructs_without_whitespace() {
        let text = "(၁)ရန်ကုန်-ပြည် လမ်း";
        let joined: String = tokenize(text).concat();
        let expected: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, expected);
    }
}
