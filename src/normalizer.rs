//! Encoding detection, legacy conversion and canonical normalization.
//!
//! Myanmar text in the wild is often typed in the Zawgyi font encoding, which
//! reuses the Myanmar block with different semantics and visual storage
//! order. Text is converted to standard Unicode when it looks like Zawgyi,
//! then the dependent marks of every cluster are put in canonical order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::char_categories::{get_char_category, is_myanmar_char, CharCategory, SENTINEL};

/// The encoding a piece of text was typed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Standard Unicode Myanmar
    Standard,
    /// Zawgyi legacy font encoding
    Legacy,
}

/// Weighted patterns that only make sense in Zawgyi
static ZAWGYI_MARKERS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    [
        // Stacked and ligature glyphs encoded above U+1060
        (r"[\x{1060}-\x{1097}]", 2),
        // e-vowel stored before its consonant
        (r"(?:^|[\s\x{104A}\x{104B}])\x{1031}[\x{1000}-\x{1021}]", 2),
        // medial ra stored before its consonant
        (r"(?:^|[\s\x{104A}\x{104B}])\x{103B}[\x{1000}-\x{1021}]", 2),
        // U+1039 used as a visible killer
        (r"\x{1039}(?:[^\x{1000}-\x{1021}]|$)", 1),
        // Zawgyi u/uu variants
        (r"[\x{1033}\x{1034}]", 1),
    ]
    .iter()
    .map(|(p, w)| (Regex::new(p).expect("Invalid regex"), *w))
    .collect()
});

/// Weighted patterns that only make sense in standard Unicode
static UNICODE_MARKERS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    [
        // e-vowel after a consonant and its medials
        (r"[\x{1000}-\x{1021}][\x{103B}-\x{103E}]*\x{1031}", 2),
        // medial ha after medial ya/ra/wa
        (r"[\x{103B}-\x{103D}]\x{103E}", 2),
        // virama followed by the subjoined consonant
        (r"\x{1039}[\x{1000}-\x{1021}]", 1),
        // asat closing a consonant
        (r"[\x{1000}-\x{1021}]\x{103A}", 1),
    ]
    .iter()
    .map(|(p, w)| (Regex::new(p).expect("Invalid regex"), *w))
    .collect()
});

/// Ordered rewrite rules from Zawgyi to Unicode.
///
/// The medial chain runs from ha down to the killer so that no rule remaps
/// the output of an earlier one. Reordering of pre-base glyphs comes last.
static ZAWGYI_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\x{200B}", ""),
        (r"\x{106A}", "\u{1009}"),
        (r"\x{1025}\x{1039}", "\u{1009}\u{1039}"),
        (r"\x{1025}\x{102E}", "\u{1026}"),
        (r"[\x{103D}\x{1087}]", "\u{103E}"),
        (r"\x{103C}", "\u{103D}"),
        (r"[\x{103B}\x{107E}-\x{1084}]", "\u{103C}"),
        (r"[\x{103A}\x{107D}]", "\u{103B}"),
        (r"\x{1039}", "\u{103A}"),
        (r"\x{1088}", "\u{103E}\u{102F}"),
        (r"\x{1089}", "\u{103E}\u{1030}"),
        (r"\x{108A}", "\u{103D}\u{103E}"),
        (r"\x{1064}", "\u{1004}\u{103A}\u{1039}"),
        (r"\x{108B}", "\u{1004}\u{103A}\u{1039}\u{102D}"),
        (r"\x{108C}", "\u{1004}\u{103A}\u{1039}\u{102E}"),
        (r"\x{108D}", "\u{1004}\u{103A}\u{1039}\u{1036}"),
        (r"\x{108E}", "\u{102D}\u{1036}"),
        (r"\x{108F}", "\u{1014}"),
        (r"\x{1090}", "\u{101B}"),
        (r"\x{1091}", "\u{100F}\u{1039}\u{100D}"),
        (r"\x{1092}", "\u{100B}\u{1039}\u{100C}"),
        (r"\x{1097}", "\u{100B}\u{1039}\u{100B}"),
        (r"\x{106E}", "\u{100D}\u{1039}\u{100D}"),
        (r"\x{106F}", "\u{100D}\u{1039}\u{100E}"),
        (r"\x{106B}", "\u{100A}"),
        (r"\x{1086}", "\u{103F}"),
        (r"\x{1060}", "\u{1039}\u{1000}"),
        (r"\x{1061}", "\u{1039}\u{1001}"),
        (r"\x{1062}", "\u{1039}\u{1002}"),
        (r"\x{1063}", "\u{1039}\u{1003}"),
        (r"\x{1065}", "\u{1039}\u{1005}"),
        (r"[\x{1066}\x{1067}]", "\u{1039}\u{1006}"),
        (r"\x{1068}", "\u{1039}\u{1007}"),
        (r"\x{1069}", "\u{1039}\u{1008}"),
        (r"\x{106C}", "\u{1039}\u{100B}"),
        (r"\x{106D}", "\u{1039}\u{100C}"),
        (r"\x{1070}", "\u{1039}\u{100F}"),
        (r"[\x{1071}\x{1072}]", "\u{1039}\u{1010}"),
        (r"\x{1096}", "\u{1039}\u{1010}\u{103D}"),
        (r"[\x{1073}\x{1074}]", "\u{1039}\u{1011}"),
        (r"\x{1075}", "\u{1039}\u{1012}"),
        (r"\x{1076}", "\u{1039}\u{1013}"),
        (r"\x{1077}", "\u{1039}\u{1014}"),
        (r"\x{1078}", "\u{1039}\u{1015}"),
        (r"\x{1079}", "\u{1039}\u{1016}"),
        (r"\x{107A}", "\u{1039}\u{1017}"),
        (r"[\x{107B}\x{1093}]", "\u{1039}\u{1018}"),
        (r"\x{107C}", "\u{1039}\u{1019}"),
        (r"\x{1085}", "\u{1039}\u{101C}"),
        (r"\x{1033}", "\u{102F}"),
        (r"\x{1034}", "\u{1030}"),
        (r"[\x{1094}\x{1095}]", "\u{1037}"),
        // kinzi is stored after its consonant in Zawgyi
        (
            r"([\x{1000}-\x{1021}])(\x{1004}\x{103A}\x{1039})",
            "${2}${1}",
        ),
        // medial ra is stored before its consonant in Zawgyi
        (
            r"\x{103C}((?:\x{1004}\x{103A}\x{1039})?[\x{1000}-\x{1021}](?:\x{1039}[\x{1000}-\x{1021}])?)",
            "${1}\u{103C}",
        ),
        // e-vowel is stored before its consonant and medials in Zawgyi
        (
            r"\x{1031}((?:\x{1004}\x{103A}\x{1039})?[\x{1000}-\x{1021}](?:\x{1039}[\x{1000}-\x{1021}])?[\x{103B}-\x{103E}]*)",
            "${1}\u{1031}",
        ),
    ]
    .iter()
    .map(|(p, r)| (Regex::new(p).expect("Invalid regex"), *r))
    .collect()
});

/// Repairs for common look-alike confusions, applied after NFC
static LOOKALIKE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // digit zero typed for wa before a dependent sign
        (r"\x{1040}([\x{102B}-\x{103E}])", "\u{101D}${1}"),
        // digit four typed for the aforementioned symbol in ၎င်း
        (r"\x{1044}\x{1004}\x{103A}\x{1038}", "\u{104E}\u{1004}\u{103A}\u{1038}"),
    ]
    .iter()
    .map(|(p, r)| (Regex::new(p).expect("Invalid regex"), *r))
    .collect()
});

/// Heuristically decide whether text is Zawgyi-encoded
pub fn is_zawgyi(text: &str) -> bool {
    let zawgyi = marker_score(&ZAWGYI_MARKERS, text);
    if zawgyi == 0 {
        return false;
    }
    zawgyi > marker_score(&UNICODE_MARKERS, text)
}

fn marker_score(markers: &[(Regex, usize)], text: &str) -> usize {
    markers
        .iter()
        .map(|(re, weight)| re.find_iter(text).count() * weight)
        .sum()
}

/// Detect the encoding of a piece of text
pub fn detect_encoding(text: &str) -> Encoding {
    if is_zawgyi(text) {
        Encoding::Legacy
    } else {
        Encoding::Standard
    }
}

/// Convert Zawgyi-encoded text to standard Unicode
pub fn zawgyi_to_unicode(text: &str) -> String {
    let mut out = text.to_string();
    for (re, rep) in ZAWGYI_RULES.iter() {
        if re.is_match(&out) {
            out = re.replace_all(&out, *rep).into_owned();
        }
    }
    out
}

/// Storage rank of a dependent mark within a cluster
fn mark_rank(c: char) -> Option<u8> {
    let rank = match c {
        '\u{103B}' => 1,
        '\u{103C}' => 2,
        '\u{103D}' => 3,
        '\u{103E}' => 4,
        '\u{1031}' => 5,
        '\u{102D}' | '\u{102E}' | '\u{1032}' => 6,
        '\u{102F}' | '\u{1030}' => 7,
        '\u{102B}' | '\u{102C}' => 8,
        '\u{1036}' => 9,
        '\u{1037}' => 10,
        '\u{103A}' => 11,
        '\u{1038}' => 12,
        _ => return None,
    };
    Some(rank)
}

/// Canonically reorder and de-duplicate the dependent marks of each cluster
fn reorder_marks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if mark_rank(chars[i]).is_none() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && mark_rank(chars[i]).is_some() {
            i += 1;
        }
        let mut run: Vec<char> = chars[start..i].to_vec();
        run.sort_by_key(|c| mark_rank(*c));
        run.dedup();
        out.extend(run);
    }

    out
}

/// Canonicalize Myanmar text. Idempotent.
///
/// Look-alike repairs match canonical mark order, so they run last.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfc()
        .filter(|c| *c != '\u{200B}')
        .collect();
    let mut out: String = reorder_marks(&stripped).nfc().collect();
    for (re, rep) in LOOKALIKE_RULES.iter() {
        if re.is_match(&out) {
            out = re.replace_all(&out, *rep).into_owned();
        }
    }
    out
}

/// Remove whitespace separating two Myanmar characters.
///
/// Myanmar does not put spaces between words, so such spaces are typing
/// noise rather than boundaries.
pub fn collapse_script_spaces(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;

        if is_myanmar_char(c) {
            let mut j = i;
            while j < chars.len() && get_char_category(chars[j]) == CharCategory::Transparent {
                j += 1;
            }
            if j > i && j < chars.len() && is_myanmar_char(chars[j]) {
                i = j;
            }
        }
    }

    out
}

/// Sanitizer switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Convert Zawgyi input to Unicode
    pub convert_legacy: bool,
    /// Apply canonical normalization
    pub normalize: bool,
    /// Drop whitespace between Myanmar characters
    pub collapse_script_spaces: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        SanitizeOptions {
            convert_legacy: true,
            normalize: true,
            collapse_script_spaces: true,
        }
    }
}

/// Bring raw input into the form the segmenter matches against.
///
/// Placeholder characters already present in the input become U+FFFD, so
/// every placeholder the reassembler sees was written by the scanner.
pub fn sanitize(text: &str, options: &SanitizeOptions) -> String {
    let text: String = text
        .chars()
        .map(|c| if c == SENTINEL { char::REPLACEMENT_CHARACTER } else { c })
        .collect();
    let mut out = match (options.convert_legacy, detect_encoding(&text)) {
        (true, Encoding::Legacy) => zawgyi_to_unicode(&text),
        _ => text,
    };
    if options.normalize {
        out = normalize(&out);
    }
    if options.collapse_script_spaces {
        out = collapse_script_spaces(&out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_unicode() {
        assert_eq!(detect_encoding("မြန်မာစာ"), Encoding::Standard);
        assert_eq!(detect_encoding("ကျေးဇူးတင်ပါတယ်"), Encoding::Standard);
        assert_eq!(detect_encoding("hello"), Encoding::Standard);
        assert_eq!(detect_encoding(""), Encoding::Standard);
    }

    #[test]
    fn test_detect_zawgyi() {
        // ေက်းဇူး typed in Zawgyi: e-vowel first, medial ya as U+103A
        assert!(is_zawgyi("\u{1031}\u{1000}\u{103A}\u{1038}\u{1007}\u{1030}\u{1038}"));
        // stacked glyph from the Zawgyi extension range
        assert!(is_zawgyi("\u{1000}\u{1060}"));
    }

    #[test]
    fn test_zawgyi_to_unicode() {
        let zawgyi = "\u{1031}\u{1000}\u{103A}\u{1038}\u{1007}\u{1030}\u{1038}";
        assert_eq!(zawgyi_to_unicode(zawgyi), "ကျေးဇူး");

        // ျမန္မာ : medial ra first, killer as U+1039
        let zawgyi = "\u{103B}\u{1019}\u{1014}\u{1039}\u{1019}\u{102C}";
        assert_eq!(zawgyi_to_unicode(zawgyi), "မြန်မာ");
    }

    #[test]
    fn test_normalize_reorders_marks() {
        // dot below typed after asat
        assert_eq!(
            normalize("\u{1004}\u{103A}\u{1037}"),
            "\u{1004}\u{1037}\u{103A}"
        );
        // anusvara typed before u
        assert_eq!(
            normalize("\u{1000}\u{1036}\u{102F}"),
            "\u{1000}\u{102F}\u{1036}"
        );
        // duplicated mark
        assert_eq!(normalize("ကိိ"), "ကိ");
    }

    #[test]
    fn test_normalize_lookalikes() {
        assert_eq!(normalize("၀ါ"), "ဝါ");
        assert_eq!(normalize("၄င်း"), "၎င်း");
        assert_eq!(normalize("၁၀၀"), "၁၀၀");
    }

    #[test]
    fn test_normalize_composes() {
        assert_eq!(normalize("\u{1025}\u{102E}"), "\u{1026}");
        assert_eq!(normalize("a\u{200B}b"), "ab");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "\u{1004}\u{103A}\u{1037}",
            "\u{1000}\u{1036}\u{102F}",
            "၀ါ",
            "မြန်မာ စာ",
            "\u{1025}\u{102E}",
            "abc ။",
            // ၎င်း typed with digit four and its marks out of order
            "\u{1044}\u{1004}\u{1038}\u{103A}",
            "\u{1040}\u{102C}\u{1036}\u{102F}",
        ];
        for text in samples {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_lookalike_after_reorder() {
        assert_eq!(
            normalize("\u{1044}\u{1004}\u{1038}\u{103A}"),
            "\u{104E}\u{1004}\u{103A}\u{1038}"
        );
    }

    #[test]
    fn test_sanitize_scrubs_placeholder() {
        let options = SanitizeOptions::default();
        assert_eq!(sanitize("က\u{FFF0}ခ", &options), "က\u{FFFD}ခ");

        let raw = SanitizeOptions {
            convert_legacy: false,
            normalize: false,
            collapse_script_spaces: false,
        };
        assert!(!sanitize("\u{FFF0}\u{FFF0}", &raw).contains(SENTINEL));
    }

    #[test]
    fn test_collapse_script_spaces() {
        assert_eq!(collapse_script_spaces("မြန် မာ"), "မြန်မာ");
        assert_eq!(collapse_script_spaces("က  \n ခ"), "ကခ");
        assert_eq!(collapse_script_spaces("Power Point"), "Power Point");
        assert_eq!(collapse_script_spaces("ကား Power"), "ကား Power");
        assert_eq!(collapse_script_spaces("က "), "က ");
    }

    #[test]
    fn test_sanitize() {
        let options = SanitizeOptions::default();
        let zawgyi = "\u{1031}\u{1000}\u{103A}\u{1038}\u{1007}\u{1030}\u{1038} \u{1010}\u{1004}\u{1039}";
        assert_eq!(sanitize(zawgyi, &options), "ကျေးဇူးတင်");
        assert_eq!(sanitize("", &options), "");
    }
}
