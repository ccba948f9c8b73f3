//! Segmenter configuration.
//!
//! A configuration names the lexicon source and the sanitizer switches and is
//! read from a JSON file:
//!
//! ```json
//! {
//!     "lexicon": { "kind": "file", "path": "burmese_df.txt", "order": "longest_first" },
//!     "convert_legacy": true,
//!     "normalize": true,
//!     "collapse_script_spaces": true
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lexicon::LexiconSource;
use crate::normalizer::SanitizeOptions;

/// Everything needed to build a [`Segmenter`](crate::Segmenter)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Where to load words from; without one the segmenter only tokenizes
    #[serde(default)]
    pub lexicon: Option<LexiconSource>,

    #[serde(flatten)]
    pub sanitize: SanitizeOptions,
}

impl SegmenterConfig {
    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::FileOrder;
    use std::path::PathBuf;

    #[test]
    fn test_full_config() {
        let json = r#"{
            "lexicon": {"kind": "file", "path": "words.txt", "order": "longest_first"},
            "convert_legacy": false
        }"#;
        let config = SegmenterConfig::from_json_str(json).unwrap();

        assert_eq!(
            config.lexicon,
            Some(LexiconSource::File {
                path: PathBuf::from("words.txt"),
                order: FileOrder::LongestFirst,
            })
        );
        assert!(!config.sanitize.convert_legacy);
        assert!(config.sanitize.normalize);
        assert!(config.sanitize.collapse_script_spaces);
    }

    #[test]
    fn test_store_source_and_defaults() {
        let json = r#"{"lexicon": {"kind": "store", "path": "rows.json"}}"#;
        let config = SegmenterConfig::from_json_str(json).unwrap();
        assert!(matches!(config.lexicon, Some(LexiconSource::Store { .. })));
        assert_eq!(config.sanitize, SanitizeOptions::default());
    }

    #[test]
    fn test_file_order_defaults_to_as_written() {
        let json = r#"{"lexicon": {"kind": "file", "path": "words.txt"}}"#;
        let config = SegmenterConfig::from_json_str(json).unwrap();
        assert!(matches!(
            config.lexicon,
            Some(LexiconSource::File {
                order: FileOrder::AsWritten,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_config() {
        let config = SegmenterConfig::from_json_str("{}").unwrap();
        assert!(config.lexicon.is_none());
    }

    #[test]
    fn test_invalid_config() {
        let err = SegmenterConfig::from_json_str(r#"{"lexicon": {"kind": "ftp"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
