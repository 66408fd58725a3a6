//! Lexicon-scoring sentiment classifier.
//!
//! Counts hits against small positive/negative word lists and turns the
//! imbalance into a label plus confidence. No model assets, fully
//! deterministic, safe for concurrent use.

use super::{CapabilityError, Sentiment, SentimentModel};

const POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "loved", "best",
    "happy", "joy", "delightful", "pleasant", "brilliant", "awesome", "superb", "positive",
    "beautiful", "enjoy", "enjoyed", "impressive", "perfect", "outstanding", "remarkable",
    "favorite", "win", "winning", "success", "successful", "helpful", "friendly", "fun",
    "exciting", "excited", "recommend", "recommended", "satisfied", "smooth", "fresh", "clean",
    "reliable", "fast", "easy", "clear", "strong",
];

const NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "worst", "hate", "hated", "poor", "sad", "angry",
    "disappointing", "disappointed", "ugly", "broken", "slow", "painful", "annoying", "negative",
    "fail", "failed", "failure", "problem", "problems", "bug", "bugs", "error", "errors", "wrong",
    "useless", "boring", "confusing", "difficult", "dirty", "unreliable", "crash", "crashed",
    "missing", "weak", "mess", "waste", "frustrating", "mediocre", "lacking", "defective",
];

/// Sentiment classifier backed by fixed word lists.
#[derive(Debug, Default, Clone)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentModel for LexiconSentiment {
    fn classify(&self, text: &str) -> Result<Sentiment, CapabilityError> {
        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut words = 0usize;

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            words += 1;
            let token = token.to_lowercase();
            if POSITIVE.contains(&token.as_str()) {
                positive += 1;
            } else if NEGATIVE.contains(&token.as_str()) {
                negative += 1;
            }
        }

        if words == 0 {
            return Err(CapabilityError::EmptyInput);
        }

        let hits = positive + negative;
        let (label, score) = if hits == 0 || positive == negative {
            ("NEUTRAL", 0.5)
        } else if positive > negative {
            ("POSITIVE", 0.5 + 0.5 * (positive - negative) as f32 / hits as f32)
        } else {
            ("NEGATIVE", 0.5 + 0.5 * (negative - positive) as f32 / hits as f32)
        };

        Ok(Sentiment {
            label: label.to_string(),
            score: score.clamp(0.0, 1.0),
        })
    }
}
