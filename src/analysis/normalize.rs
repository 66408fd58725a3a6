//! Input normalization: the single length-bounding transform applied once
//! per request before any stage runs.

use serde::Serialize;

/// Default cap on processed input, in characters. A cost-bounding policy
/// constant, not a model limit.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1000;

/// The length-bounded working copy of the request text shared by all
/// stages. Derived once per request and immutable thereafter. Lengths are
/// counted in characters (Unicode scalar values), matching the original
/// wire contract, so truncation never splits a scalar but may split a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedText {
    text: String,
    was_truncated: bool,
    original_chars: usize,
    processed_chars: usize,
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// First `max_chars` characters, for stages with a narrower input
    /// window than the normalizer's.
    pub fn window(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn was_truncated(&self) -> bool {
        self.was_truncated
    }

    pub fn original_chars(&self) -> usize {
        self.original_chars
    }

    pub fn processed_chars(&self) -> usize {
        self.processed_chars
    }
}

/// Total over all inputs, including the empty string. Keeps the first
/// `limit` characters when the input is longer.
pub fn normalize(raw: &str, limit: usize) -> NormalizedText {
    let original_chars = raw.chars().count();
    let (text, was_truncated) = if original_chars > limit {
        let byte_end = raw
            .char_indices()
            .nth(limit)
            .map(|(idx, _)| idx)
            .unwrap_or(raw.len());
        (raw[..byte_end].to_string(), true)
    } else {
        (raw.to_string(), false)
    };
    let processed_chars = text.chars().count();
    NormalizedText {
        text,
        was_truncated,
        original_chars,
        processed_chars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_passes_through() {
        let n = normalize("hello world", DEFAULT_MAX_INPUT_CHARS);
        assert_eq!(n.as_str(), "hello world");
        assert!(!n.was_truncated());
        assert_eq!(n.original_chars(), 11);
        assert_eq!(n.processed_chars(), 11);
    }

    #[test]
    fn input_at_exactly_the_limit_is_not_truncated() {
        let raw = "x".repeat(1000);
        let n = normalize(&raw, 1000);
        assert!(!n.was_truncated());
        assert_eq!(n.processed_chars(), 1000);
    }

    #[test]
    fn input_one_past_the_limit_is_truncated_to_the_limit() {
        let raw = "x".repeat(1001);
        let n = normalize(&raw, 1000);
        assert!(n.was_truncated());
        assert_eq!(n.processed_chars(), 1000);
        assert_eq!(n.original_chars(), 1001);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Each '語' is one character but three bytes.
        let raw = "語".repeat(12);
        let n = normalize(&raw, 10);
        assert!(n.was_truncated());
        assert_eq!(n.processed_chars(), 10);
        assert_eq!(n.as_str(), "語".repeat(10));
    }

    #[test]
    fn empty_input_is_total() {
        let n = normalize("", 1000);
        assert_eq!(n.as_str(), "");
        assert!(!n.was_truncated());
        assert_eq!(n.original_chars(), 0);
        assert_eq!(n.processed_chars(), 0);
    }

    #[test]
    fn window_caps_character_count() {
        let n = normalize("abcdef", 1000);
        assert_eq!(n.window(3), "abc");
        assert_eq!(n.window(100), "abcdef");
    }

    #[test]
    fn window_respects_multibyte_boundaries() {
        let n = normalize("aé語b", 1000);
        assert_eq!(n.window(2), "aé");
        assert_eq!(n.window(3), "aé語");
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        let n = normalize("one  two\tthree\nfour", 1000);
        assert_eq!(n.word_count(), 4);
    }
}
