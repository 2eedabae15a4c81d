//! # wordstat-tokenize
//!
//! **Tier 1 (Word Policy)**
//!
//! Splits text into whitespace-delimited tokens and decides which tokens are
//! words. The punctuation set and the numeric predicate are separate
//! functions so each can be tested on its own.

#![forbid(unsafe_code)]

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Characters removed from every token before classification.
pub const DEFAULT_PUNCTUATION: &str = "-+.^:?,=()";

/// The set of characters stripped from tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PunctuationSet {
    chars: Vec<char>,
}

impl PunctuationSet {
    /// Build a set from the characters of `chars`. Duplicates are ignored.
    pub fn new(chars: &str) -> Self {
        let mut set: Vec<char> = chars.chars().collect();
        set.sort_unstable();
        set.dedup();
        Self { chars: set }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The set rendered back as a string, in code point order.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION)
    }
}

impl From<String> for PunctuationSet {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<PunctuationSet> for String {
    fn from(value: PunctuationSet) -> Self {
        value.as_string()
    }
}

/// True for the whitespace characters that separate tokens: space, tab,
/// line feed, vertical tab, form feed and carriage return.
///
/// Other Unicode spaces such as U+00A0 are part of a token.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Split `text` on runs of separator whitespace.
///
/// Leading and trailing whitespace produce no empty tokens; empty input
/// produces no tokens at all.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

/// Remove every character of `punctuation` from `token`.
///
/// Borrows when nothing needs removing.
pub fn strip_punctuation<'a>(token: &'a str, punctuation: &PunctuationSet) -> Cow<'a, str> {
    if token.chars().any(|c| punctuation.contains(c)) {
        Cow::Owned(token.chars().filter(|c| !punctuation.contains(*c)).collect())
    } else {
        Cow::Borrowed(token)
    }
}

/// True when every character is a decimal digit (general category `Nd`),
/// in any script.
///
/// Vacuously true for the empty string.
pub fn is_numeric(candidate: &str) -> bool {
    candidate
        .chars()
        .all(|c| c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber)
}

/// Length of a word in characters.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Strip punctuation from `token` and return it if it is a word.
///
/// `None` means the token was numeric or empty after stripping.
pub fn classify<'a>(token: &'a str, punctuation: &PunctuationSet) -> Option<Cow<'a, str>> {
    let candidate = strip_punctuation(token, punctuation);
    if is_numeric(&candidate) {
        None
    } else {
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_any_whitespace_run() {
        let tokens: Vec<&str> = tokenize("  Hello\tworld \n\n& good  ").collect();
        assert_eq!(tokens, vec!["Hello", "world", "&", "good"]);
    }

    #[test]
    fn tokenize_keeps_non_breaking_space_inside_token() {
        let tokens: Vec<&str> = tokenize("a\u{00A0}b c\u{0B}d\u{0C}e").collect();
        assert_eq!(tokens, vec!["a\u{00A0}b", "c", "d", "e"]);
    }

    #[test]
    fn tokenize_empty_input_is_empty() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" \t\r\n").count(), 0);
    }

    #[test]
    fn strip_removes_every_default_punctuation_char() {
        let set = PunctuationSet::default();
        assert_eq!(strip_punctuation("a-b+c.d^e:f?g,h=i(j)", &set), "abcdefghij");
    }

    #[test]
    fn strip_keeps_slash_and_ampersand() {
        let set = PunctuationSet::default();
        assert_eq!(strip_punctuation("18/05/2016", &set), "18/05/2016");
        assert_eq!(strip_punctuation("&", &set), "&");
    }

    #[test]
    fn strip_borrows_when_clean() {
        let set = PunctuationSet::default();
        assert!(matches!(strip_punctuation("clean", &set), Cow::Borrowed(_)));
    }

    #[test]
    fn is_numeric_is_vacuously_true_for_empty() {
        assert!(is_numeric(""));
        assert!(is_numeric("2016"));
        assert!(!is_numeric("18/05/2016"));
        assert!(!is_numeric("4th"));
    }

    #[test]
    fn is_numeric_accepts_digits_of_any_script() {
        assert!(is_numeric("٢٠١٦"));
        assert!(is_numeric("４２"));
        assert!(is_numeric("१२३"));
        assert!(!is_numeric("²"));
        assert!(!is_numeric("Ⅻ"));
    }

    #[test]
    fn classify_rejects_formatted_numbers_and_bare_punctuation() {
        let set = PunctuationSet::default();
        assert_eq!(classify("3.14", &set), None);
        assert_eq!(classify("-1,000", &set), None);
        assert_eq!(classify("(+44)", &set), None);
        assert_eq!(classify("...", &set), None);
        assert_eq!(classify("morning.", &set).as_deref(), Some("morning"));
    }

    #[test]
    fn word_length_counts_chars_not_bytes() {
        assert_eq!(word_length("café"), 4);
    }

    #[test]
    fn punctuation_set_ignores_duplicates() {
        let set = PunctuationSet::new("..--");
        assert_eq!(set.as_string(), "-.");
    }
}
