//! Analysis capabilities consumed by the pipeline stages.
//!
//! A capability is one pre-initialized analysis function (classification,
//! summarization, keyphrase extraction, embedding) shared read-only across
//! all requests for the process lifetime. Capabilities report failure via
//! [`CapabilityError`]; converting a failure into a fallback value is the
//! caller's job, never the capability's.
//!
//! The trait objects are the seam for model-backed adapters. The local
//! backends shipped here are deterministic and self-contained so the service
//! runs (and tests run) without external model assets.

pub mod embedder;
pub mod keyphrase;
pub mod lexicon;
pub mod summarizer;

pub use embedder::HashedEmbedder;
pub use keyphrase::NgramKeyphraseExtractor;
pub use lexicon::LexiconSentiment;
pub use summarizer::FrequencySummarizer;

use serde::{Deserialize, Serialize};

/// Capability failure surfaced to the stage boundary.
#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("input text is empty after tokenization")]
    EmptyInput,

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Classification output: a label with a confidence score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: String,
    pub score: f32,
}

impl Sentiment {
    /// The documented fallback when classification fails.
    pub fn unknown() -> Self {
        Self {
            label: "UNKNOWN".to_string(),
            score: 0.0,
        }
    }
}

/// Generation bounds for summarization, expressed in the summarizer's own
/// length unit. `greedy` pins decoding to the deterministic path; sampling
/// decoders are not conforming backends.
#[derive(Debug, Clone, Copy)]
pub struct SummaryBounds {
    pub min_length: usize,
    pub max_length: usize,
    pub greedy: bool,
}

/// Stop-word filtering applied by keyphrase extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopWords {
    #[default]
    English,
    None,
}

/// Extraction parameters: candidate phrase lengths, stop-word policy, and
/// how many ranked phrases to return.
#[derive(Debug, Clone)]
pub struct KeyphraseSpec {
    pub ngram: (usize, usize),
    pub stop_words: StopWords,
    pub top_n: usize,
}

/// A candidate phrase with its relevance score, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPhrase {
    pub phrase: String,
    pub score: f32,
}

/// Text classification capability.
pub trait SentimentModel: Send + Sync {
    fn classify(&self, text: &str) -> Result<Sentiment, CapabilityError>;
}

/// Summarization capability.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, bounds: &SummaryBounds) -> Result<String, CapabilityError>;
}

/// Keyphrase extraction capability. Results are ordered by relevance rank.
pub trait KeyphraseExtractor: Send + Sync {
    fn extract(
        &self,
        text: &str,
        spec: &KeyphraseSpec,
    ) -> Result<Vec<ScoredPhrase>, CapabilityError>;
}

/// Dense vector embedding capability with fixed output dimensionality.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, CapabilityError>;
}
