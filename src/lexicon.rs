//! The segmentation lexicon.
//!
//! A Lexicon is an ordered list of words plus their document frequencies. The
//! order is the match priority: the scanner tries words in this order and the
//! first word to claim a span keeps it.
//!
//! Two load paths exist. A flat file of `word,document_frequency` lines is
//! kept in file order unless [`FileOrder::LongestFirst`] is requested. A
//! [`LexiconStore`] is queried for active multi-syllable words ordered by
//! descending syllable count, then descending length, and carries no
//! frequencies.
//!
//! Words are normalized on load, the same way input text is, so a word typed
//! with its marks out of order still matches.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::char_categories::SENTINEL;
use crate::error::LoadError;
use crate::normalizer::normalize;
use crate::syllable::syllable_count;

/// A single lexicon word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// The word
    pub word: String,
    /// The word as codepoints, as the scanner compares it
    pub chars: Vec<char>,
    /// Document frequency (file-backed lexicons only)
    pub document_frequency: Option<u64>,
}

impl LexiconEntry {
    fn new(word: &str, document_frequency: Option<u64>) -> Self {
        LexiconEntry {
            word: word.to_string(),
            chars: word.chars().collect(),
            document_frequency,
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the word is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// An immutable, ordered word list
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Entries in match-priority order
    entries: Vec<LexiconEntry>,
    /// Word to entry position
    index: HashMap<String, usize>,
    /// Largest document frequency seen at load time
    total_reference_count: u64,
}

impl Lexicon {
    /// Create an empty lexicon. Segmenting with it only tokenizes.
    pub fn empty() -> Self {
        Lexicon::default()
    }

    /// Load a lexicon from a configured source
    pub fn load(source: &LexiconSource) -> Result<Self, LoadError> {
        match source {
            LexiconSource::File { path, order } => {
                let mut builder = LexiconBuilder::with_order(*order);
                builder.load_file(path)?;
                Ok(builder.build())
            }
            LexiconSource::Store { path } => {
                let store = RowStore::from_json_file(path)?;
                Lexicon::from_store(&store)
            }
        }
    }

    /// Load the active multi-syllable words of a store
    pub fn from_store(store: &dyn LexiconStore) -> Result<Self, LoadError> {
        let rows = store.query(&StoreQuery::segmentation())?;
        let mut lexicon = Lexicon::empty();

        for row in rows {
            let word = normalize(row.word.trim());
            if word.is_empty() {
                warn!("skipping empty word returned by lexicon store");
                continue;
            }
            if word.contains(SENTINEL) {
                warn!(word = %row.word, "skipping store word containing the placeholder");
                continue;
            }
            if !lexicon.push(&word, None) {
                warn!(word = %word, "skipping duplicate word returned by lexicon store");
            }
        }

        debug!(words = lexicon.len(), "loaded lexicon from store");
        Ok(lexicon)
    }

    fn push(&mut self, word: &str, document_frequency: Option<u64>) -> bool {
        if self.index.contains_key(word) {
            return false;
        }
        self.index.insert(word.to_string(), self.entries.len());
        self.entries.push(LexiconEntry::new(word, document_frequency));
        if let Some(df) = document_frequency {
            self.total_reference_count = self.total_reference_count.max(df);
        }
        true
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.word.clone(), i))
            .collect();
    }

    /// Get the number of words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in match-priority order
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Words in match-priority order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Check if a word is in the lexicon
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Get the document frequency of a word, if the load path provided one
    pub fn document_frequency(&self, word: &str) -> Option<u64> {
        self.index
            .get(word)
            .and_then(|&i| self.entries[i].document_frequency)
    }

    /// The largest document frequency seen at load time
    pub fn total_reference_count(&self) -> u64 {
        self.total_reference_count
    }

    /// Check whether no word is preceded by a shorter one
    pub fn is_longest_first(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].len() >= w[1].len())
    }
}

/// How a file-backed lexicon is ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOrder {
    /// Keep the file's line order
    #[default]
    AsWritten,
    /// Stable sort by descending character length
    LongestFirst,
}

/// Where a lexicon comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexiconSource {
    /// A `word,document_frequency` file
    File {
        path: PathBuf,
        #[serde(default)]
        order: FileOrder,
    },
    /// A JSON dump of store rows
    Store { path: PathBuf },
}

/// Builder for loading a Lexicon from `word,document_frequency` files
pub struct LexiconBuilder {
    lexicon: Lexicon,
    order: FileOrder,
}

impl LexiconBuilder {
    /// Create a new builder keeping file order
    pub fn new() -> Self {
        Self::with_order(FileOrder::AsWritten)
    }

    /// Create a new builder with the given ordering
    pub fn with_order(order: FileOrder) -> Self {
        LexiconBuilder {
            lexicon: Lexicon::empty(),
            order,
        }
    }

    /// Add a single word. Returns false if the word was already present,
    /// or is empty or contains the placeholder once normalized.
    pub fn add(&mut self, word: &str, document_frequency: u64) -> bool {
        let word = normalize(word.trim());
        if word.is_empty() || word.contains(SENTINEL) {
            return false;
        }
        self.lexicon.push(&word, Some(document_frequency))
    }

    /// Load words from file content (format: word,document_frequency)
    pub fn load_csv(&mut self, content: &str) -> Result<(), LoadError> {
        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;

            // Skip comments and empty lines
            let line = line.trim_start_matches('\u{FEFF}').trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, df) = line
                .split_once(',')
                .ok_or_else(|| LoadError::MissingFrequency {
                    line: line_no,
                    content: line.to_string(),
                })?;

            let word = normalize(word.trim());
            if word.is_empty() {
                return Err(LoadError::EmptyWord { line: line_no });
            }
            if word.contains(SENTINEL) {
                return Err(LoadError::ReservedChar { line: line_no });
            }

            let df = df.trim();
            let df = df
                .parse::<u64>()
                .map_err(|_| LoadError::InvalidFrequency {
                    line: line_no,
                    value: df.to_string(),
                })?;

            if !self.lexicon.push(&word, Some(df)) {
                warn!(word = %word, line = line_no, "skipping duplicate lexicon word");
            }
        }

        Ok(())
    }

    /// Load words from a file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_csv(&content)
    }

    /// Build and return the Lexicon
    pub fn build(self) -> Lexicon {
        let mut lexicon = self.lexicon;

        match self.order {
            FileOrder::LongestFirst => {
                lexicon.entries.sort_by(|a, b| b.len().cmp(&a.len()));
                lexicon.reindex();
            }
            FileOrder::AsWritten => {
                if !lexicon.is_longest_first() {
                    warn!(
                        "lexicon is used in file order, which is not longest-first; \
                         longer words may lose spans to their prefixes"
                    );
                }
            }
        }

        debug!(
            words = lexicon.len(),
            total_reference_count = lexicon.total_reference_count,
            order = ?self.order,
            "loaded lexicon"
        );
        lexicon
    }
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort keys understood by a lexicon store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOrder {
    SyllableCountDesc,
    LengthDesc,
}

/// A filtered, ordered selection of store rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreQuery {
    /// Leave out deleted rows
    pub active_only: bool,
    /// Smallest syllable count to select
    pub min_syllables: usize,
    /// Sort keys, most significant first
    pub order: Vec<StoreOrder>,
}

impl StoreQuery {
    /// The selection the segmenter matches with
    pub fn segmentation() -> Self {
        StoreQuery {
            active_only: true,
            min_syllables: 2,
            order: vec![StoreOrder::SyllableCountDesc, StoreOrder::LengthDesc],
        }
    }
}

/// One row of a lexicon store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRow {
    pub word: String,
    /// Computed from the word when absent
    #[serde(default)]
    pub syllable_count: Option<usize>,
    /// Length in characters, computed from the word when absent
    #[serde(default)]
    pub length: Option<usize>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl StoreRow {
    /// Create an active row with derived counts
    pub fn new(word: &str) -> Self {
        StoreRow {
            word: word.to_string(),
            syllable_count: None,
            length: None,
            is_deleted: false,
        }
    }

    fn syllables(&self) -> usize {
        self.syllable_count
            .unwrap_or_else(|| syllable_count(self.word.trim()))
    }

    fn length(&self) -> usize {
        self.length
            .unwrap_or_else(|| self.word.trim().chars().count())
    }
}

/// External persistence for lexicon words
pub trait LexiconStore {
    fn query(&self, query: &StoreQuery) -> Result<Vec<StoreRow>, LoadError>;
}

/// A store over rows held in memory, typically loaded from a JSON dump
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    rows: Vec<StoreRow>,
}

impl RowStore {
    pub fn new(rows: Vec<StoreRow>) -> Self {
        RowStore { rows }
    }

    /// Parse a JSON array of rows
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(RowStore::new(serde_json::from_str(json)?))
    }

    /// Read a JSON array of rows from a file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

impl LexiconStore for RowStore {
    fn query(&self, query: &StoreQuery) -> Result<Vec<StoreRow>, LoadError> {
        let mut rows: Vec<(usize, usize, &StoreRow)> = self
            .rows
            .iter()
            .filter(|row| !(query.active_only && row.is_deleted))
            .map(|row| (row.syllables(), row.length(), row))
            .filter(|(syllables, _, _)| *syllables >= query.min_syllables)
            .collect();

        rows.sort_by(|a, b| {
            query
                .order
                .iter()
                .map(|key| match key {
                    StoreOrder::SyllableCountDesc => b.0.cmp(&a.0),
                    StoreOrder::LengthDesc => b.1.cmp(&a.1),
                })
                .find(|ord| ord.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(rows.into_iter().map(|(_, _, row)| row.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_csv_keeps_file_order() {
        let mut builder = LexiconBuilder::new();
        builder
            .load_csv("# comment\nမြန်မာ,120\n\nမြန်မာစာ,45\n")
            .unwrap();
        let lexicon = builder.build();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.words().collect::<Vec<_>>(), vec!["မြန်မာ", "မြန်မာစာ"]);
        assert_eq!(lexicon.document_frequency("မြန်မာစာ"), Some(45));
        assert_eq!(lexicon.total_reference_count(), 120);
        assert!(!lexicon.is_longest_first());
    }

    #[test]
    fn test_longest_first_order() {
        let mut builder = LexiconBuilder::with_order(FileOrder::LongestFirst);
        builder.load_csv("AB,3\nABC,5\nA,1\nXY,2").unwrap();
        let lexicon = builder.build();

        assert_eq!(
            lexicon.words().collect::<Vec<_>>(),
            vec!["ABC", "AB", "XY", "A"]
        );
        assert!(lexicon.is_longest_first());
        assert_eq!(lexicon.document_frequency("ABC"), Some(5));
    }

    #[test]
    fn test_missing_frequency() {
        let mut builder = LexiconBuilder::new();
        let err = builder.load_csv("မြန်မာ,1\nစာ").unwrap_err();
        assert!(matches!(err, LoadError::MissingFrequency { line: 2, .. }));
    }

    #[test]
    fn test_invalid_frequency() {
        let mut builder = LexiconBuilder::new();
        let err = builder.load_csv("စာ,-4").unwrap_err();
        assert!(matches!(err, LoadError::InvalidFrequency { line: 1, .. }));
    }

    #[test]
    fn test_empty_word() {
        let mut builder = LexiconBuilder::new();
        let err = builder.load_csv(" ,4").unwrap_err();
        assert!(matches!(err, LoadError::EmptyWord { line: 1 }));
    }

    #[test]
    fn test_words_are_normalized() {
        let mut builder = LexiconBuilder::new();
        // anusvara typed before u, and a zero-width space
        builder
            .load_csv("\u{1000}\u{1036}\u{102F},7\nမြန်\u{200B}မာ,3")
            .unwrap();
        let lexicon = builder.build();

        assert!(lexicon.contains("\u{1000}\u{102F}\u{1036}"));
        assert!(lexicon.contains("မြန်မာ"));
        assert_eq!(lexicon.document_frequency("မြန်မာ"), Some(3));
    }

    #[test]
    fn test_placeholder_in_word_rejected() {
        let mut builder = LexiconBuilder::new();
        let err = builder.load_csv("စာ,1
က\u{FFF0},2").unwrap_err();
        assert!(matches!(err, LoadError::ReservedChar { line: 2 }));

        let mut builder = LexiconBuilder::new();
        assert!(!builder.add("\u{FFF0}", 1));
        assert!(builder.add("စာ", 1));

        let store = RowStore::new(vec![StoreRow::new("မြန်\u{FFF0}မာ"), StoreRow::new("မြန်မာ")]);
        let lexicon = Lexicon::from_store(&store).unwrap();
        assert_eq!(lexicon.words().collect::<Vec<_>>(), vec!["မြန်မာ"]);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let mut builder = LexiconBuilder::new();
        builder.load_csv("စာ,4\nစာ,9").unwrap();
        let lexicon = builder.build();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.document_frequency("စာ"), Some(4));
    }

    #[test]
    fn test_missing_file() {
        let mut builder = LexiconBuilder::new();
        let err = builder.load_file("/nonexistent/lexicon.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_store_query_filters_and_orders() {
        let store = RowStore::new(vec![
            StoreRow::new("မြန်မာ"),
            StoreRow::new("စာ"),
            StoreRow::new("မြန်မာစာ"),
            StoreRow {
                is_deleted: true,
                ..StoreRow::new("မြန်မာပြည်")
            },
            StoreRow::new("ကျေးဇူး"),
        ]);
        let lexicon = Lexicon::from_store(&store).unwrap();

        // စာ is single-syllable, မြန်မာပြည် is deleted
        assert_eq!(
            lexicon.words().collect::<Vec<_>>(),
            vec!["မြန်မာစာ", "ကျေးဇူး", "မြန်မာ"]
        );
        assert_eq!(lexicon.document_frequency("မြန်မာ"), None);
        assert_eq!(lexicon.total_reference_count(), 0);
    }

    #[test]
    fn test_store_from_json() {
        let json = r#"[
            {"word": " ကျေးဇူးတင် ", "syllable_count": 3, "length": 10},
            {"word": "ခင်ဗျား", "is_deleted": false}
        ]"#;
        let store = RowStore::from_json_str(json).unwrap();
        let lexicon = Lexicon::from_store(&store).unwrap();
        assert_eq!(
            lexicon.words().collect::<Vec<_>>(),
            vec!["ကျေးဇူးတင်", "ခင်ဗျား"]
        );
    }

    #[test]
    fn test_store_bad_json() {
        let err = RowStore::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
