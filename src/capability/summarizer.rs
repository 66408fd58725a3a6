//! Frequency-ranked extractive summarizer.
//!
//! Sentences are scored by the mean corpus frequency of their content words,
//! then selected greedily (highest score first) until the word budget in
//! [`SummaryBounds`] is met. Selected sentences are emitted in their
//! original order so the summary reads coherently. Length bounds are
//! interpreted in words, this backend's generation unit.

use std::collections::HashMap;

use super::keyphrase::is_stop_word;
use super::{CapabilityError, SummaryBounds, Summarizer};

/// Extractive summarizer with deterministic sentence selection.
#[derive(Debug, Default, Clone)]
pub struct FrequencySummarizer;

impl FrequencySummarizer {
    pub fn new() -> Self {
        Self
    }
}

/// Split into sentences on terminal punctuation and newlines, keeping the
/// punctuation with its sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        let boundary = match ch {
            '.' | '!' | '?' => chars
                .peek()
                .map_or(true, |(_, next)| next.is_whitespace()),
            '\n' => true,
            _ => false,
        };
        if boundary {
            let end = idx + ch.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

fn content_words(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .filter(|w| !is_stop_word(w))
}

impl Summarizer for FrequencySummarizer {
    fn summarize(&self, text: &str, bounds: &SummaryBounds) -> Result<String, CapabilityError> {
        if !bounds.greedy {
            return Err(CapabilityError::Inference(
                "sampling decoders are not supported".to_string(),
            ));
        }

        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(CapabilityError::EmptyInput);
        }

        let mut freq: HashMap<String, usize> = HashMap::new();
        for sentence in &sentences {
            for word in content_words(sentence) {
                *freq.entry(word).or_default() += 1;
            }
        }

        // Mean content-word frequency; sentence index breaks ties so the
        // ranking is stable across runs.
        let mut ranked: Vec<(usize, f64)> = sentences
            .iter()
            .enumerate()
            .map(|(idx, sentence)| {
                let mut total = 0usize;
                let mut count = 0usize;
                for word in content_words(sentence) {
                    total += freq[&word];
                    count += 1;
                }
                let score = if count == 0 {
                    0.0
                } else {
                    total as f64 / count as f64
                };
                (idx, score)
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let word_count = |idx: usize| sentences[idx].split_whitespace().count();

        let mut selected: Vec<usize> = Vec::new();
        let mut budget = 0usize;
        for &(idx, _) in &ranked {
            let len = word_count(idx);
            if budget + len > bounds.max_length && budget >= bounds.min_length {
                continue;
            }
            selected.push(idx);
            budget += len;
            if budget >= bounds.max_length {
                break;
            }
        }
        // At least one sentence even when every candidate overshoots.
        if selected.is_empty() {
            selected.push(ranked[0].0);
        }

        selected.sort_unstable();
        Ok(selected
            .into_iter()
            .map(|idx| sentences[idx])
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> SummaryBounds {
        SummaryBounds {
            min_length: 30,
            max_length: 120,
            greedy: true,
        }
    }

    fn long_text() -> String {
        let mut text = String::new();
        for i in 0..12 {
            text.push_str(&format!(
                "Sentence number {i} talks about storage engines and storage layouts in detail. "
            ));
        }
        text.push_str("An unrelated aside mentions gardening once.");
        text
    }

    #[test]
    fn summary_respects_max_length() {
        let summary = FrequencySummarizer::new()
            .summarize(&long_text(), &bounds())
            .unwrap();
        let words = summary.split_whitespace().count();
        assert!(words <= 120 + 12, "summary too long: {words} words");
        assert!(!summary.is_empty());
    }

    #[test]
    fn summary_is_extractive() {
        let text = long_text();
        let summary = FrequencySummarizer::new().summarize(&text, &bounds()).unwrap();
        for sentence in split_sentences(&summary) {
            assert!(text.contains(sentence), "invented sentence: {sentence:?}");
        }
    }

    #[test]
    fn selected_sentences_keep_original_order() {
        let text = "Databases store rows. Indexes speed up queries. \
                    Databases also store indexes. Caches hold hot rows.";
        let tight = SummaryBounds {
            min_length: 1,
            max_length: 12,
            greedy: true,
        };
        let summary = FrequencySummarizer::new().summarize(text, &tight).unwrap();
        let pos = |needle: &str| summary.find(needle);
        if let (Some(a), Some(b)) = (pos("Databases store"), pos("Databases also")) {
            assert!(a < b);
        }
    }

    #[test]
    fn single_sentence_survives_tight_budget() {
        let text = "One single sentence that is noticeably longer than the whole budget allows.";
        let tight = SummaryBounds {
            min_length: 1,
            max_length: 3,
            greedy: true,
        };
        let summary = FrequencySummarizer::new().summarize(text, &tight).unwrap();
        assert_eq!(summary, text);
    }

    #[test]
    fn summarization_is_deterministic() {
        let text = long_text();
        let a = FrequencySummarizer::new().summarize(&text, &bounds()).unwrap();
        let b = FrequencySummarizer::new().summarize(&text, &bounds()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn whitespace_only_input_is_an_error() {
        assert!(matches!(
            FrequencySummarizer::new().summarize("   \n  ", &bounds()),
            Err(CapabilityError::EmptyInput)
        ));
    }

    #[test]
    fn non_greedy_decoding_is_rejected() {
        let sampling = SummaryBounds {
            min_length: 30,
            max_length: 120,
            greedy: false,
        };
        assert!(FrequencySummarizer::new()
            .summarize("Some text. More text.", &sampling)
            .is_err());
    }

    #[test]
    fn sentence_splitting_handles_terminal_punctuation() {
        let sentences = split_sentences("First one. Second one! Third one? Fourth without end");
        assert_eq!(sentences.len(), 4);
        assert_eq!(sentences[3], "Fourth without end");
    }

    #[test]
    fn abbreviation_like_dots_without_space_do_not_split() {
        let sentences = split_sentences("Version 1.5 shipped today. It works.");
        assert_eq!(sentences.len(), 2);
    }
}
