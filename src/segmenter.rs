//! The segmenter facade.
//!
//! Sanitizes raw text, marks dictionary words with placeholders and restores
//! them in order, interleaved with the unmatched runs.

use std::sync::Arc;

use tracing::debug;

use crate::config::SegmenterConfig;
use crate::error::{LoadError, ReassemblyError};
use crate::lexicon::{Lexicon, LexiconSource};
use crate::normalizer::{sanitize, SanitizeOptions};
use crate::reassembler::reassemble;
use crate::scanner::MatchScanner;
use crate::syllable::{MyanmarSyllableBreak, SyllableBreak};
use crate::token::Word;

/// The main segmenter
///
/// The lexicon is immutable and shared, so one segmenter (or clones of it)
/// can serve concurrent `segment` calls without locking.
#[derive(Clone)]
pub struct Segmenter {
    /// The dictionary (shared reference)
    lexicon: Arc<Lexicon>,
    /// Syllable-boundary rules for accepting matches
    breaks: Arc<dyn SyllableBreak>,
    /// Sanitizer switches
    options: SanitizeOptions,
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("lexicon", &self.lexicon)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Segmenter {
    /// Create a new segmenter with the given lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_arc(Arc::new(lexicon))
    }

    /// Create a new segmenter with a shared lexicon reference
    pub fn with_arc(lexicon: Arc<Lexicon>) -> Self {
        Segmenter {
            lexicon,
            breaks: Arc::new(MyanmarSyllableBreak),
            options: SanitizeOptions::default(),
        }
    }

    /// Load a lexicon and build a segmenter around it
    pub fn build(source: &LexiconSource) -> Result<Self, LoadError> {
        Ok(Self::new(Lexicon::load(source)?))
    }

    /// Build a segmenter from a configuration
    pub fn from_config(config: &SegmenterConfig) -> Result<Self, LoadError> {
        let lexicon = match &config.lexicon {
            Some(source) => Lexicon::load(source)?,
            None => Lexicon::empty(),
        };
        Ok(Self::new(lexicon).with_options(config.sanitize))
    }

    /// Replace the sanitizer switches
    pub fn with_options(mut self, options: SanitizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the syllable-boundary rules
    pub fn with_syllable_break(mut self, breaks: impl SyllableBreak + 'static) -> Self {
        self.breaks = Arc::new(breaks);
        self
    }

    /// Get a reference to the lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Get the Arc reference to the lexicon (for sharing)
    pub fn lexicon_arc(&self) -> Arc<Lexicon> {
        Arc::clone(&self.lexicon)
    }

    /// Get the sanitizer switches
    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Bring raw text into the form words are matched against
    pub fn sanitize(&self, text: &str) -> String {
        sanitize(text, &self.options)
    }

    /// Segment text into an ordered list of words
    pub fn segment(&self, text: &str) -> Result<Vec<String>, ReassemblyError> {
        Ok(self
            .segment_words(text)?
            .into_iter()
            .map(|w| w.text)
            .collect())
    }

    /// Segment text, keeping offsets and match information for each word
    pub fn segment_words(&self, text: &str) -> Result<Vec<Word>, ReassemblyError> {
        let sanitized = self.sanitize(text);
        if sanitized.is_empty() {
            return Ok(Vec::new());
        }

        let mut buffer: Vec<char> = sanitized.chars().collect();
        let records = MatchScanner::new(&self.lexicon, self.breaks.as_ref()).scan(&mut buffer);
        let matches = records.len();

        let mut words = reassemble(&buffer, records)?;
        words.retain(|w| !w.text.is_empty());
        for word in words.iter_mut().filter(|w| w.is_match()) {
            word.freq = self.lexicon.document_frequency(&word.text);
        }

        debug!(
            chars = buffer.len(),
            matches,
            words = words.len(),
            "segmented text"
        );
        Ok(words)
    }
}
