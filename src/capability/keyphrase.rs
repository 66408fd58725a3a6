//! N-gram keyphrase extraction with stop-word filtering.
//!
//! Candidates are runs of content words (stop words and punctuation break a
//! run). Unigrams score by term frequency, bigrams by the summed frequency
//! of their members, so phrases built from recurring vocabulary rank first.
//! Ties break lexicographically to keep the ranking deterministic.

use std::collections::HashMap;
use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::{CapabilityError, KeyphraseExtractor, KeyphraseSpec, ScoredPhrase, StopWords};

/// Common English stop words. Shared with the extractive summarizer's
/// frequency table so both rank over content words only.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
    "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

pub(crate) fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Frequency-ranked n-gram extractor.
#[derive(Debug, Default, Clone)]
pub struct NgramKeyphraseExtractor;

impl NgramKeyphraseExtractor {
    pub fn new() -> Self {
        Self
    }
}

/// Lowercased word stream where `None` marks a phrase boundary (stop word or
/// punctuation-only gap).
fn tokenize(text: &str, stop_words: StopWords) -> Vec<Option<String>> {
    let mut tokens = Vec::new();
    for raw in text.split(|c: char| !c.is_alphanumeric()) {
        if raw.is_empty() {
            continue;
        }
        let word = raw.to_lowercase();
        if stop_words == StopWords::English && is_stop_word(&word) {
            tokens.push(None);
        } else {
            tokens.push(Some(word));
        }
    }
    tokens
}

impl KeyphraseExtractor for NgramKeyphraseExtractor {
    fn extract(
        &self,
        text: &str,
        spec: &KeyphraseSpec,
    ) -> Result<Vec<ScoredPhrase>, CapabilityError> {
        let (min_n, max_n) = spec.ngram;
        if min_n == 0 || max_n < min_n {
            return Err(CapabilityError::Inference(format!(
                "invalid ngram range ({min_n}, {max_n})"
            )));
        }

        let tokens = tokenize(text, spec.stop_words);
        if !tokens.iter().any(|t| t.is_some()) {
            return Err(CapabilityError::EmptyInput);
        }

        let mut freq: HashMap<&str, usize> = HashMap::new();
        for word in tokens.iter().flatten() {
            *freq.entry(word.as_str()).or_default() += 1;
        }

        // Candidate phrases are n-grams inside a single run of content words.
        let mut scored: HashMap<String, f32> = HashMap::new();
        for run in tokens.split(|t| t.is_none()) {
            let words: Vec<&String> = run.iter().flatten().collect();
            for n in min_n..=max_n.min(words.len()) {
                for gram in words.windows(n) {
                    let score: usize = gram.iter().map(|w| freq[w.as_str()]).sum();
                    let phrase = gram
                        .iter()
                        .map(|w| w.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");
                    let entry = scored.entry(phrase).or_insert(0.0);
                    *entry = entry.max(score as f32);
                }
            }
        }

        let mut ranked: Vec<ScoredPhrase> = scored
            .into_iter()
            .map(|(phrase, score)| ScoredPhrase { phrase, score })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.phrase.cmp(&b.phrase))
        });
        ranked.truncate(spec.top_n);
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> KeyphraseSpec {
        KeyphraseSpec {
            ngram: (1, 2),
            stop_words: StopWords::English,
            top_n: 5,
        }
    }

    #[test]
    fn returns_at_most_top_n_phrases() {
        let phrases = NgramKeyphraseExtractor::new()
            .extract(
                "rust compilers optimize rust programs while rust tooling builds rust crates",
                &spec(),
            )
            .unwrap();
        assert!(!phrases.is_empty());
        assert!(phrases.len() <= 5);
    }

    #[test]
    fn repeated_terms_rank_first() {
        let phrases = NgramKeyphraseExtractor::new()
            .extract("neural networks train neural networks on large datasets", &spec())
            .unwrap();
        assert!(phrases[0].phrase.contains("neural") || phrases[0].phrase.contains("networks"));
    }

    #[test]
    fn stop_words_never_appear_in_phrases() {
        let phrases = NgramKeyphraseExtractor::new()
            .extract("the cat and the dog ran over the bridge in the morning", &spec())
            .unwrap();
        for p in &phrases {
            for word in p.phrase.split(' ') {
                assert!(!is_stop_word(word), "stop word {word:?} leaked into {p:?}");
            }
        }
    }

    #[test]
    fn bigrams_do_not_span_stop_words() {
        // "cat" and "dog" are separated by "and": no "cat dog" candidate.
        let phrases = NgramKeyphraseExtractor::new()
            .extract("cat and dog cat and dog", &spec())
            .unwrap();
        assert!(phrases.iter().all(|p| p.phrase != "cat dog"));
    }

    #[test]
    fn scores_are_ranked_descending() {
        let phrases = NgramKeyphraseExtractor::new()
            .extract("alpha alpha alpha beta beta gamma delta epsilon", &spec())
            .unwrap();
        for pair in phrases.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "search engines index web pages and search queries match indexed pages";
        let a = NgramKeyphraseExtractor::new().extract(text, &spec()).unwrap();
        let b = NgramKeyphraseExtractor::new().extract(text, &spec()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn stop_word_only_input_is_an_error() {
        assert!(matches!(
            NgramKeyphraseExtractor::new().extract("the and of to in", &spec()),
            Err(CapabilityError::EmptyInput)
        ));
    }

    #[test]
    fn invalid_ngram_range_is_an_error() {
        let bad = KeyphraseSpec {
            ngram: (2, 1),
            stop_words: StopWords::English,
            top_n: 5,
        };
        assert!(NgramKeyphraseExtractor::new().extract("some text here", &bad).is_err());
    }

    #[test]
    fn stop_word_filtering_can_be_disabled() {
        let open = KeyphraseSpec {
            ngram: (1, 1),
            stop_words: StopWords::None,
            top_n: 50,
        };
        let phrases = NgramKeyphraseExtractor::new()
            .extract("the the the signal", &open)
            .unwrap();
        assert_eq!(phrases[0].phrase, "the");
    }
}
