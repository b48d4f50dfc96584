//! Text normalization shared by the matcher and the delegation resolver.
//!
//! Text is NFKC-normalized and lowercased, then split on anything that is not
//! alphanumeric or one of `#`, `+`, `.` so that names like `c#`, `c++` and
//! `.net` survive as single tokens. Trailing dots (sentence ends) are trimmed
//! and a small English stop-word list is dropped.

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "any", "are", "as", "at", "be", "but", "by", "can", "could", "do", "does",
    "for", "from", "have", "how", "i", "in", "into", "is", "it", "its", "me", "my", "of", "on",
    "or", "our", "please", "should", "so", "some", "that", "the", "their", "then", "this", "to",
    "us", "we", "what", "when", "which", "with", "would", "you", "your",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '#' | '+' | '.')
}

/// Split text into normalized tokens, preserving order and repeats.
pub fn tokens(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    normalized
        .split(|c: char| !is_token_char(c))
        .map(|t| t.trim_end_matches('.'))
        .filter(|t| t.chars().any(char::is_alphanumeric))
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

/// Distinct normalized tokens of `text`.
pub fn word_set(text: &str) -> HashSet<String> {
    tokens(text).into_iter().collect()
}
