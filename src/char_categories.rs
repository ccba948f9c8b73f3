//! Character classification for Myanmar Unicode characters.
//!
//! This module categorizes each codepoint of a Myanmar string into the classes
//! the syllable rules, the chunker and the sanitizer need.

/// Stacking virama (U+1039). A consonant after it is subjoined to the one before.
pub const VIRAMA: char = '\u{1039}';

/// Visible killer mark, asat (U+103A).
pub const ASAT: char = '\u{103A}';

/// Dot below (U+1037).
pub const DOT_BELOW: char = '\u{1037}';

/// Medial ya (U+103B).
pub const MEDIAL_YA: char = '\u{103B}';

/// Medial ha (U+103E).
pub const MEDIAL_HA: char = '\u{103E}';

/// Placeholder written over text claimed by a dictionary match.
///
/// An unassigned codepoint in the Specials block. Sanitized input never
/// contains it and lexicon words are not allowed to.
pub const SENTINEL: char = '\u{FFF0}';

/// Character categories used in Myanmar text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Consonant (U+1000..U+1021, plus the great sa U+103F)
    Cons,
    /// Independent vowel letter
    IndepVow,
    /// Medial ya, ra, wa, ha
    Medial,
    /// Dependent vowel sign
    Vow,
    /// Anusvara, dot below and visarga
    Tone,
    /// Asat (killer)
    Asat,
    /// Stacking virama
    Virama,
    /// Myanmar digit
    Digit,
    /// Myanmar punctuation (section marks)
    Punct,
    /// Myanmar symbols (locative, completed, aforementioned, genitive)
    Symbol,
    /// Characters of the extended Myanmar blocks (Mon, Shan, Karen...)
    Extended,
    /// Whitespace, ignored by the chunker
    Transparent,
    /// ASCII and general punctuation
    OtherPunct,
    /// Latin letters
    Latin,
    /// ASCII digits
    LatinDigit,
    /// The match placeholder
    Sentinel,
    /// Anything else
    #[default]
    Other,
}

impl CharCategory {
    /// Check if this category can only follow a base character
    pub fn is_dependent(&self) -> bool {
        matches!(
            self,
            CharCategory::Medial
                | CharCategory::Vow
                | CharCategory::Tone
                | CharCategory::Asat
                | CharCategory::Virama
        )
    }

    /// Check if a syllable can start with this category
    pub fn is_syllable_start(&self) -> bool {
        matches!(self, CharCategory::Cons | CharCategory::IndepVow)
    }

    /// Check if this is any kind of punctuation
    pub fn is_punct(&self) -> bool {
        matches!(self, CharCategory::Punct | CharCategory::OtherPunct)
    }

    /// Check if this category belongs to the Myanmar blocks
    pub fn is_myanmar(&self) -> bool {
        matches!(
            self,
            CharCategory::Cons
                | CharCategory::IndepVow
                | CharCategory::Medial
                | CharCategory::Vow
                | CharCategory::Tone
                | CharCategory::Asat
                | CharCategory::Virama
                | CharCategory::Digit
                | CharCategory::Punct
                | CharCategory::Symbol
                | CharCategory::Extended
        )
    }
}

/// Get the category of a character
pub fn get_char_category(c: char) -> CharCategory {
    match c {
        SENTINEL => CharCategory::Sentinel,
        '\u{1000}'..='\u{1021}' | '\u{103F}' => CharCategory::Cons,
        '\u{1022}'..='\u{102A}' => CharCategory::IndepVow,
        '\u{102B}'..='\u{1032}' => CharCategory::Vow,
        '\u{1036}' | '\u{1037}' | '\u{1038}' => CharCategory::Tone,
        VIRAMA => CharCategory::Virama,
        ASAT => CharCategory::Asat,
        '\u{103B}'..='\u{103E}' => CharCategory::Medial,
        '\u{1040}'..='\u{1049}' => CharCategory::Digit,
        '\u{104A}' | '\u{104B}' => CharCategory::Punct,
        '\u{104C}'..='\u{104F}' => CharCategory::Symbol,
        '\u{1033}'..='\u{1035}'
        | '\u{1050}'..='\u{109F}'
        | '\u{AA60}'..='\u{AA7F}'
        | '\u{A9E0}'..='\u{A9FF}' => CharCategory::Extended,
        c if c.is_whitespace() || c == '\u{200B}' || c == '\u{FEFF}' => {
            CharCategory::Transparent
        }
        '0'..='9' => CharCategory::LatinDigit,
        c if c.is_ascii_alphabetic() => CharCategory::Latin,
        c if c.is_alphabetic() && ('\u{00C0}'..='\u{024F}').contains(&c) => CharCategory::Latin,
        c if c.is_ascii_punctuation() => CharCategory::OtherPunct,
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' | '\u{3001}' | '\u{3002}' => {
            CharCategory::OtherPunct
        }
        _ => CharCategory::Other,
    }
}

/// Check if a character lies in the core Myanmar block used by the sanitizer
/// (U+1000..=U+104F)
pub fn is_myanmar_char(c: char) -> bool {
    ('\u{1000}'..='\u{104F}').contains(&c)
}

/// A codepoint buffer with category information for each character
#[derive(Debug, Clone)]
pub struct MyString {
    /// The characters
    pub chars: Vec<char>,
    /// Category for each character (by index)
    pub categories: Vec<CharCategory>,
}

impl MyString {
    /// Create a new MyString from a string
    pub fn new(s: &str) -> Self {
        Self::from_chars(s.chars().collect())
    }

    /// Create a new MyString from an owned codepoint buffer
    pub fn from_chars(chars: Vec<char>) -> Self {
        let categories = chars.iter().copied().map(get_char_category).collect();
        MyString { chars, categories }
    }

    /// Get the length (number of characters)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the category at a specific index
    pub fn get_category(&self, idx: usize) -> Option<CharCategory> {
        self.categories.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_myanmar_consonants() {
        assert_eq!(get_char_category('က'), CharCategory::Cons);
        assert_eq!(get_char_category('မ'), CharCategory::Cons);
        assert_eq!(get_char_category('အ'), CharCategory::Cons);
    }

    #[test]
    fn test_dependent_signs() {
        assert_eq!(get_char_category('ာ'), CharCategory::Vow);
        assert_eq!(get_char_category('ြ'), CharCategory::Medial);
        assert_eq!(get_char_category('်'), CharCategory::Asat);
        assert_eq!(get_char_category('္'), CharCategory::Virama);
        assert_eq!(get_char_category('း'), CharCategory::Tone);
        assert!(get_char_category('ု').is_dependent());
        assert!(!get_char_category('က').is_dependent());
    }

    #[test]
    fn test_punct_and_digits() {
        assert_eq!(get_char_category('။'), CharCategory::Punct);
        assert_eq!(get_char_category('၃'), CharCategory::Digit);
        assert_eq!(get_char_category('-'), CharCategory::OtherPunct);
        assert_eq!(get_char_category('7'), CharCategory::LatinDigit);
    }

    #[test]
    fn test_space_and_sentinel() {
        assert_eq!(get_char_category(' '), CharCategory::Transparent);
        assert_eq!(get_char_category('\n'), CharCategory::Transparent);
        assert_eq!(get_char_category(SENTINEL), CharCategory::Sentinel);
        assert!(!is_myanmar_char(SENTINEL));
    }

    #[test]
    fn test_my_string() {
        let ms = MyString::new("ကျွန်");
        assert_eq!(ms.len(), 5);
        assert_eq!(ms.get_category(0), Some(CharCategory::Cons));
        assert_eq!(ms.get_category(1), Some(CharCategory::Medial));
        assert_eq!(ms.get_category(4), Some(CharCategory::Asat));
    }
}
