//! Embedding stage.

use std::sync::Arc;

use crate::capability::Embedder;

use super::normalize::NormalizedText;
use super::stage::{AnalysisStage, StageOutcome};

/// Embeds the first `window_chars` characters of the normalized text (same
/// conservative window rationale as the sentiment stage). Fallback on
/// failure is an empty vector.
pub struct EmbeddingStage {
    embedder: Arc<dyn Embedder>,
    window_chars: usize,
}

impl EmbeddingStage {
    pub fn new(embedder: Arc<dyn Embedder>, window_chars: usize) -> Self {
        Self {
            embedder,
            window_chars,
        }
    }
}

impl AnalysisStage for EmbeddingStage {
    type Output = Vec<f32>;

    fn name(&self) -> &'static str {
        "embedding"
    }

    fn run(&self, text: &NormalizedText) -> StageOutcome<Vec<f32>> {
        match self.embedder.embed(text.window(self.window_chars)) {
            Ok(vector) => StageOutcome::Completed(vector),
            Err(err) => {
                tracing::warn!(stage = self.name(), error = %err, "stage fell back");
                StageOutcome::Degraded(Vec::new())
            }
        }
    }
}
