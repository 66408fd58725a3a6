//! Summarization stage with conditional activation.

use std::sync::Arc;

use crate::capability::{SummaryBounds, Summarizer};

use super::normalize::NormalizedText;
use super::stage::{AnalysisStage, StageOutcome};

/// Summarizes only when the normalized text exceeds `activation_words`
/// whitespace-delimited words; shorter inputs are returned verbatim, which
/// is the designed short-input behavior, not a fallback. On capability
/// failure the fallback is the first `fallback_chars` characters with a
/// literal ellipsis appended.
pub struct SummaryStage {
    summarizer: Arc<dyn Summarizer>,
    activation_words: usize,
    bounds: SummaryBounds,
    fallback_chars: usize,
}

impl SummaryStage {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        activation_words: usize,
        bounds: SummaryBounds,
        fallback_chars: usize,
    ) -> Self {
        Self {
            summarizer,
            activation_words,
            bounds,
            fallback_chars,
        }
    }

    fn fallback(&self, text: &NormalizedText) -> String {
        format!("{}...", text.window(self.fallback_chars))
    }
}

impl AnalysisStage for SummaryStage {
    type Output = String;

    fn name(&self) -> &'static str {
        "summary"
    }

    fn run(&self, text: &NormalizedText) -> StageOutcome<String> {
        if text.word_count() <= self.activation_words {
            return StageOutcome::Completed(text.as_str().to_string());
        }
        match self.summarizer.summarize(text.as_str(), &self.bounds) {
            Ok(summary) => StageOutcome::Completed(summary),
            Err(err) => {
                tracing::warn!(stage = self.name(), error = %err, "stage fell back");
                StageOutcome::Degraded(self.fallback(text))
            }
        }
    }
}
