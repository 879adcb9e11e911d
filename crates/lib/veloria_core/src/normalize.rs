// @awa-component: CORE-Normalizer
//
//! Misspelling normalizer.
//!
//! Replaces whole whitespace-delimited tokens that exactly match a known
//! misspelling. Anything else passes through with its original casing.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Known misspellings (lowercase) and their corrections.
pub const CORRECTIONS: &[(&str, &str)] = &[
    ("fevr", "fever"),
    ("hedache", "headache"),
    ("unconsious", "unconscious"),
    ("diahrea", "diarrhea"),
    ("vommiting", "vomiting"),
    ("alergy", "allergy"),
    ("medicen", "medicine"),
    ("surgary", "surgery"),
    ("injuree", "injury"),
    ("treatmnt", "treatment"),
    ("medcation", "medication"),
];

static CORRECTION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CORRECTIONS.iter().copied().collect());

/// Look up the correction for a single token, ignoring case.
pub fn correct_word(word: &str) -> Option<&'static str> {
    CORRECTION_MAP.get(word.to_lowercase().as_str()).copied()
}

/// Correct known misspellings and collapse whitespace to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(|word| correct_word(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_listed_misspellings() {
        assert_eq!(normalize("i hav fevr"), "i hav fever");
        assert_eq!(normalize("bad hedache today"), "bad headache today");
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(normalize("FEVR and Alergy"), "fever and allergy");
    }

    #[test]
    fn unlisted_words_keep_their_casing() {
        assert_eq!(normalize("Need MEDICIN now"), "Need MEDICIN now");
    }

    #[test]
    fn only_exact_tokens_are_corrected() {
        // Trailing punctuation makes the token a different word.
        assert_eq!(normalize("fevr, hedache."), "fevr, hedache.");
        assert_eq!(normalize("fevrish"), "fevrish");
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(normalize("  hello \t\n world  "), "hello world");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn correction_keys_are_lowercase_single_tokens() {
        for (key, _) in CORRECTIONS {
            assert_eq!(*key, key.to_lowercase());
            assert!(!key.contains(char::is_whitespace));
        }
    }
}
