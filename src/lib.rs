//! # mmseg-rs
//!
//! A dictionary-driven Myanmar word segmenter written in Rust.
//!
//! Myanmar is written without spaces between words. The segmenter tries the
//! lexicon's words in priority order, overwrites every accepted occurrence
//! with a same-length placeholder, then chunks the marked text and puts the
//! matched words back in place, interleaved with the text no word claimed.
//!
//! ## Quick Start
//!
//! ```rust
//! use mmseg_rs::{LexiconBuilder, Segmenter};
//!
//! // Build a lexicon from word,document_frequency lines
//! let csv = "ကျေးဇူးတင်,900\nခင်ဗျား,450";
//! let mut builder = LexiconBuilder::new();
//! builder.load_csv(csv).unwrap();
//! let lexicon = builder.build();
//!
//! // Create a segmenter and segment text
//! let segmenter = Segmenter::new(lexicon);
//! let words = segmenter.segment("ကျေးဇူးတင်ခင်ဗျား။").unwrap();
//!
//! assert_eq!(words, vec!["ကျေးဇူးတင်", "ခင်ဗျား", "။"]);
//! ```
//!
//! ## Zawgyi Input
//!
//! Text typed in the Zawgyi legacy encoding is detected and converted before
//! matching:
//!
//! ```rust
//! use mmseg_rs::{is_zawgyi, zawgyi_to_unicode};
//!
//! let zawgyi = "\u{1031}\u{1000}\u{103A}\u{1038}\u{1007}\u{1030}\u{1038}";
//! assert!(is_zawgyi(zawgyi));
//! assert_eq!(zawgyi_to_unicode(zawgyi), "ကျေးဇူး");
//! ```
//!
//! ## Python Bindings
//!
//! This library can be compiled as a Python extension module with the
//! `python` feature.

pub mod char_categories;
pub mod chunker;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod reassembler;
pub mod scanner;
pub mod segmenter;
pub mod syllable;
pub mod token;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use char_categories::{get_char_category, CharCategory, MyString, SENTINEL, VIRAMA};
pub use chunker::{tokenize, Chunk, Chunker};
pub use config::SegmenterConfig;
pub use error::{ConfigError, LoadError, ReassemblyError};
pub use lexicon::{
    FileOrder, Lexicon, LexiconBuilder, LexiconEntry, LexiconSource, LexiconStore, RowStore,
    StoreOrder, StoreQuery, StoreRow,
};
pub use normalizer::{
    detect_encoding, is_zawgyi, normalize, sanitize, zawgyi_to_unicode, Encoding,
    SanitizeOptions,
};
pub use reassembler::reassemble;
pub use scanner::{MatchRecord, MatchScanner};
pub use segmenter::Segmenter;
pub use syllable::{split_syllables, syllable_count, MyanmarSyllableBreak, SyllableBreak};
pub use token::{ChunkType, Word, WordSource};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
