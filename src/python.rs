//! Python bindings for mmseg-rs using PyO3
//!
//! This module provides Python-compatible wrappers around the Rust segmenter.

use std::path::PathBuf;

use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::error::LoadError;
use crate::lexicon::{FileOrder, Lexicon, LexiconBuilder, LexiconSource};
use crate::normalizer;
use crate::segmenter::Segmenter as RustSegmenter;
use crate::token::Word;

fn load_err(e: LoadError) -> PyErr {
    match e {
        LoadError::Io { .. } => PyIOError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn word_to_dict<'py>(py: Python<'py>, word: &Word) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("text", &word.text)?;
    dict.set_item("start", word.start)?;
    dict.set_item("len", word.len)?;
    dict.set_item("chunk_type", word.chunk_type.as_str())?;
    dict.set_item("is_match", word.is_match())?;
    dict.set_item("freq", word.freq)?;
    Ok(dict)
}

/// Segmenter - the main segmenter class
///
/// Example:
///     >>> from mmseg_rs import Segmenter
///     >>> seg = Segmenter(dict_path="burmese_df.txt")
///     >>> seg.segment("ကျေးဇူးတင်ပါတယ်ခင်ဗျား။")
#[pyclass(name = "Segmenter")]
pub struct PySegmenter {
    inner: RustSegmenter,
}

#[pymethods]
impl PySegmenter {
    /// Create a new Segmenter.
    ///
    /// Args:
    ///     dict_path: word,document_frequency lexicon file (optional)
    ///     store_path: JSON dump of lexicon store rows (optional)
    ///     longest_first: sort the lexicon file longest word first (default: False)
    ///
    /// Without a lexicon the segmenter only tokenizes.
    #[new]
    #[pyo3(signature = (dict_path=None, store_path=None, longest_first=false))]
    fn new(
        dict_path: Option<PathBuf>,
        store_path: Option<PathBuf>,
        longest_first: bool,
    ) -> PyResult<Self> {
        let source = match (dict_path, store_path) {
            (Some(_), Some(_)) => {
                return Err(PyValueError::new_err(
                    "pass either dict_path or store_path, not both",
                ))
            }
            (Some(path), None) => Some(LexiconSource::File {
                path,
                order: if longest_first {
                    FileOrder::LongestFirst
                } else {
                    FileOrder::AsWritten
                },
            }),
            (None, Some(path)) => Some(LexiconSource::Store { path }),
            (None, None) => None,
        };

        let inner = match source {
            Some(source) => RustSegmenter::build(&source).map_err(load_err)?,
            None => RustSegmenter::new(Lexicon::empty()),
        };
        Ok(PySegmenter { inner })
    }

    /// Build a segmenter from word,document_frequency lines held in a string
    #[staticmethod]
    #[pyo3(signature = (csv_content, longest_first=false))]
    fn from_csv(csv_content: &str, longest_first: bool) -> PyResult<Self> {
        let order = if longest_first {
            FileOrder::LongestFirst
        } else {
            FileOrder::AsWritten
        };
        let mut builder = LexiconBuilder::with_order(order);
        builder.load_csv(csv_content).map_err(load_err)?;
        Ok(PySegmenter {
            inner: RustSegmenter::new(builder.build()),
        })
    }

    /// Segment text into a list of strings
    fn segment(&self, py: Python<'_>, text: &str) -> PyResult<Vec<String>> {
        py.allow_threads(|| self.inner.segment(text))
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))
    }

    /// Segment text into a list of dicts with offsets and match information
    fn segment_words<'py>(&self, py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyList>> {
        let words = py
            .allow_threads(|| self.inner.segment_words(text))
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;

        let list = PyList::empty_bound(py);
        for word in &words {
            list.append(word_to_dict(py, word)?)?;
        }
        Ok(list)
    }

    /// The text exactly as the segmenter matches against it
    fn sanitize(&self, text: &str) -> String {
        self.inner.sanitize(text)
    }

    /// Check if a word is in the lexicon
    fn __contains__(&self, word: &str) -> bool {
        self.inner.lexicon().contains(word)
    }

    /// Get the number of words in the lexicon
    fn __len__(&self) -> usize {
        self.inner.lexicon().len()
    }

    fn __repr__(&self) -> String {
        format!("Segmenter(words={})", self.inner.lexicon().len())
    }
}

/// Check whether text looks like Zawgyi-encoded Myanmar
#[pyfunction]
fn is_zawgyi(text: &str) -> bool {
    normalizer::is_zawgyi(text)
}

/// Convert Zawgyi-encoded text to standard Unicode
#[pyfunction]
fn zawgyi_to_unicode(text: &str) -> String {
    normalizer::zawgyi_to_unicode(text)
}

/// Normalize standard Myanmar text
#[pyfunction]
fn normalize(text: &str) -> String {
    normalizer::normalize(text)
}

/// Split Myanmar text into syllables
#[pyfunction]
fn split_syllables(text: &str) -> Vec<String> {
    crate::syllable::split_syllables(text)
}

/// Create the Python module
#[pymodule]
fn mmseg_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySegmenter>()?;
    m.add_function(wrap_pyfunction!(is_zawgyi, m)?)?;
    m.add_function(wrap_pyfunction!(zawgyi_to_unicode, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(split_syllables, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
