//! Sentiment classification stage.

use std::sync::Arc;

use crate::capability::{Sentiment, SentimentModel};

use super::normalize::NormalizedText;
use super::stage::{AnalysisStage, StageOutcome};

/// Classifies the first `window_chars` characters of the normalized text.
/// The character window is a conservative stand-in for the model's token
/// window and is kept deliberately (true tokenization would change observed
/// behavior on inputs near the limit).
pub struct SentimentStage {
    model: Arc<dyn SentimentModel>,
    window_chars: usize,
}

impl SentimentStage {
    pub fn new(model: Arc<dyn SentimentModel>, window_chars: usize) -> Self {
        Self {
            model,
            window_chars,
        }
    }
}

impl AnalysisStage for SentimentStage {
    type Output = Sentiment;

    fn name(&self) -> &'static str {
        "sentiment"
    }

    fn run(&self, text: &NormalizedText) -> StageOutcome<Sentiment> {
        match self.model.classify(text.window(self.window_chars)) {
            Ok(sentiment) => StageOutcome::Completed(sentiment),
            Err(err) => {
                tracing::warn!(stage = self.name(), error = %err, "stage fell back");
                StageOutcome::Degraded(Sentiment::unknown())
            }
        }
    }
}
