//! Myanmar syllable-boundary rules.
//!
//! A candidate dictionary match is only accepted when cutting the text at its
//! end leaves a well-formed syllable boundary. The rules follow the usual
//! Myanmar syllable segmentation pattern: a syllable starts at a consonant or
//! independent vowel that is not subjoined by a preceding virama and is not
//! itself closed by an asat, virama or dot below.

use crate::char_categories::{
    get_char_category, CharCategory, ASAT, DOT_BELOW, MEDIAL_HA, MEDIAL_YA, VIRAMA,
};

/// Predicate deciding whether text may be cut at a given offset.
///
/// `suffix` starts at the candidate's first character and `len` is the
/// candidate length in characters, so the cut falls between `suffix[len - 1]`
/// and `suffix[len]`.
pub trait SyllableBreak: Send + Sync {
    fn is_valid_break(&self, suffix: &[char], len: usize) -> bool;
}

/// Default orthographic rules for Myanmar script
#[derive(Debug, Clone, Copy, Default)]
pub struct MyanmarSyllableBreak;

impl SyllableBreak for MyanmarSyllableBreak {
    fn is_valid_break(&self, suffix: &[char], len: usize) -> bool {
        if len == 0 || len > suffix.len() {
            return false;
        }
        if len == suffix.len() {
            return true;
        }

        let prev = get_char_category(suffix[len - 1]);
        let next = get_char_category(suffix[len]);

        // The consonant after a virama belongs to the stack before it
        if prev == CharCategory::Virama {
            return false;
        }

        match next {
            c if c.is_dependent() => false,
            CharCategory::Extended => false,
            CharCategory::Cons => !is_closed_consonant(suffix, len),
            CharCategory::Digit => prev != CharCategory::Digit,
            CharCategory::Latin | CharCategory::LatinDigit => {
                !matches!(prev, CharCategory::Latin | CharCategory::LatinDigit)
            }
            _ => true,
        }
    }
}

/// A consonant followed (optionally through medial ya/ha) by asat, virama or
/// dot below closes the previous syllable instead of opening a new one.
fn is_closed_consonant(text: &[char], idx: usize) -> bool {
    let mut j = idx + 1;
    if matches!(text.get(j), Some(&MEDIAL_YA) | Some(&MEDIAL_HA)) {
        j += 1;
    }
    matches!(text.get(j), Some(&ASAT) | Some(&VIRAMA) | Some(&DOT_BELOW))
}

/// Split text into syllables using the default rules
pub fn split_syllables(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let rules = MyanmarSyllableBreak;
    let mut syls = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        if rules.is_valid_break(&chars[start..], i - start) {
            syls.push(chars[start..i].iter().collect());
            start = i;
        }
    }
    if start < chars.len() {
        syls.push(chars[start..].iter().collect());
    }

    syls
}

/// Count the syllables of a word
pub fn syllable_count(word: &str) -> usize {
    split_syllables(word).len()
}
