//! Pipeline orchestration.
//!
//! Runs the four analysis stages against one normalized input and
//! assembles the fixed-shape report. Stage failures are absorbed at the
//! stage boundary, so once validation and normalization have passed this
//! path cannot fail.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::capability::{
    Embedder, FrequencySummarizer, HashedEmbedder, KeyphraseExtractor, KeyphraseSpec,
    LexiconSentiment, NgramKeyphraseExtractor, Sentiment, SentimentModel, StopWords,
    SummaryBounds, Summarizer,
};

use super::embedding::EmbeddingStage;
use super::keywords::KeywordStage;
use super::normalize::{normalize, DEFAULT_MAX_INPUT_CHARS};
use super::sentiment::SentimentStage;
use super::stage::AnalysisStage;
use super::summary::SummaryStage;

/// Minimum trimmed character count for a request to enter the pipeline.
pub const MIN_TEXT_CHARS: usize = 10;

/// Policy constants for normalization and the per-stage input/output
/// limits. All serde-defaulted so partial config files work.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Normalizer cap, in characters.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Character window for sentiment and embedding, a conservative proxy
    /// for the underlying model token windows.
    #[serde(default = "default_model_window_chars")]
    pub model_window_chars: usize,

    /// Summarization activates only above this many words.
    #[serde(default = "default_summary_activation_words")]
    pub summary_activation_words: usize,

    /// Generated summary length bounds, in the summarizer's length unit.
    #[serde(default = "default_summary_min_length")]
    pub summary_min_length: usize,

    #[serde(default = "default_summary_max_length")]
    pub summary_max_length: usize,

    /// Characters kept by the summary fallback before the ellipsis.
    #[serde(default = "default_summary_fallback_chars")]
    pub summary_fallback_chars: usize,

    /// Ranked keyphrases returned per request.
    #[serde(default = "default_keyword_top_n")]
    pub keyword_top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            model_window_chars: default_model_window_chars(),
            summary_activation_words: default_summary_activation_words(),
            summary_min_length: default_summary_min_length(),
            summary_max_length: default_summary_max_length(),
            summary_fallback_chars: default_summary_fallback_chars(),
            keyword_top_n: default_keyword_top_n(),
        }
    }
}

fn default_max_input_chars() -> usize {
    DEFAULT_MAX_INPUT_CHARS
}

fn default_model_window_chars() -> usize {
    512
}

fn default_summary_activation_words() -> usize {
    50
}

fn default_summary_min_length() -> usize {
    30
}

fn default_summary_max_length() -> usize {
    120
}

fn default_summary_fallback_chars() -> usize {
    200
}

fn default_keyword_top_n() -> usize {
    5
}

/// The four injected analysis capabilities, loaded once at startup and
/// shared read-only across requests.
#[derive(Clone)]
pub struct Capabilities {
    pub sentiment: Arc<dyn SentimentModel>,
    pub summarizer: Arc<dyn Summarizer>,
    pub keyphrases: Arc<dyn KeyphraseExtractor>,
    pub embedder: Arc<dyn Embedder>,
}

impl Capabilities {
    /// The deterministic in-crate backends. No model assets required.
    pub fn local() -> Self {
        Self {
            sentiment: Arc::new(LexiconSentiment::new()),
            summarizer: Arc::new(FrequencySummarizer::new()),
            keyphrases: Arc::new(NgramKeyphraseExtractor::new()),
            embedder: Arc::new(HashedEmbedder::default()),
        }
    }
}

/// Request-level rejection. Stage failures never surface here; the only
/// client-caused failure is an input too short to analyze.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Text too short or empty")]
    TextTooShort,
}

/// The aggregated response. All fields are always present; failed stages
/// contribute their fallback values, so the shape is fixed regardless of
/// which stages succeed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub sentiment: Sentiment,
    pub summary: String,
    pub keywords: Vec<String>,
    pub embedding: Vec<f32>,
    pub text_length: usize,
    pub processed_length: usize,
}

/// Runs the fixed stage set over one normalized input per request.
pub struct AnalysisPipeline {
    max_input_chars: usize,
    sentiment: SentimentStage,
    summary: SummaryStage,
    keywords: KeywordStage,
    embedding: EmbeddingStage,
}

impl AnalysisPipeline {
    pub fn new(config: &PipelineConfig, capabilities: Capabilities) -> Self {
        let bounds = SummaryBounds {
            min_length: config.summary_min_length,
            max_length: config.summary_max_length,
            greedy: true,
        };
        let spec = KeyphraseSpec {
            ngram: (1, 2),
            stop_words: StopWords::English,
            top_n: config.keyword_top_n,
        };
        Self {
            max_input_chars: config.max_input_chars,
            sentiment: SentimentStage::new(capabilities.sentiment, config.model_window_chars),
            summary: SummaryStage::new(
                capabilities.summarizer,
                config.summary_activation_words,
                bounds,
                config.summary_fallback_chars,
            ),
            keywords: KeywordStage::new(capabilities.keyphrases, spec),
            embedding: EmbeddingStage::new(capabilities.embedder, config.model_window_chars),
        }
    }

    /// Validates, normalizes, runs every stage, and assembles the report.
    ///
    /// Stages have no data dependency on each other, only on the shared
    /// read-only [`NormalizedText`]; they run sequentially here.
    pub fn analyze(&self, raw: &str) -> Result<AnalysisReport, AnalyzeError> {
        if raw.trim().chars().count() < MIN_TEXT_CHARS {
            return Err(AnalyzeError::TextTooShort);
        }

        let text = normalize(raw, self.max_input_chars);
        tracing::debug!(
            original_chars = text.original_chars(),
            processed_chars = text.processed_chars(),
            truncated = text.was_truncated(),
            "input normalized"
        );

        let sentiment = self.sentiment.run(&text);
        let summary = self.summary.run(&text);
        let keywords = self.keywords.run(&text);
        let embedding = self.embedding.run(&text);

        Ok(AnalysisReport {
            sentiment: sentiment.into_inner(),
            summary: summary.into_inner(),
            keywords: keywords.into_inner(),
            embedding: embedding.into_inner(),
            text_length: text.original_chars(),
            processed_length: text.processed_chars(),
        })
    }
}
