//! Error types for lexicon loading, configuration and reassembly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a lexicon. No partial lexicon is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read lexicon `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: missing document frequency in `{content}`")]
    MissingFrequency { line: usize, content: String },

    #[error("line {line}: invalid document frequency `{value}`")]
    InvalidFrequency { line: usize, value: String },

    #[error("line {line}: empty word")]
    EmptyWord { line: usize },

    #[error("line {line}: word contains the reserved placeholder U+FFF0")]
    ReservedChar { line: usize },

    #[error("lexicon store query failed: {0}")]
    Store(String),

    #[error("malformed lexicon store rows: {0}")]
    Json(#[from] serde_json::Error),
}

/// The match queue and the marked text disagree.
///
/// This is an internal invariant violation between the scanner and the
/// chunker, never a consequence of the input text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReassemblyError {
    #[error("match queue exhausted after {consumed} of {needed} placeholder characters")]
    QueueExhausted { needed: usize, consumed: usize },

    #[error("placeholder run of {needed} characters overrun by matches totalling {consumed}")]
    Overrun { needed: usize, consumed: usize },

    #[error("{0} recorded matches were never consumed")]
    Unconsumed(usize),
}

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
