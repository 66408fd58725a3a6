//! Keyphrase extraction stage.

use std::sync::Arc;

use crate::capability::{KeyphraseExtractor, KeyphraseSpec};

use super::normalize::NormalizedText;
use super::stage::{AnalysisStage, StageOutcome};

/// Extracts ranked keyphrases over the full normalized text. Relevance
/// scores from the capability are discarded; only the ranked phrase
/// sequence is kept. Fallback on failure is an empty list.
pub struct KeywordStage {
    extractor: Arc<dyn KeyphraseExtractor>,
    spec: KeyphraseSpec,
}

impl KeywordStage {
    pub fn new(extractor: Arc<dyn KeyphraseExtractor>, spec: KeyphraseSpec) -> Self {
        Self { extractor, spec }
    }
}

impl AnalysisStage for KeywordStage {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "keywords"
    }

    fn run(&self, text: &NormalizedText) -> StageOutcome<Vec<String>> {
        match self.extractor.extract(text.as_str(), &self.spec) {
            Ok(phrases) => {
                StageOutcome::Completed(phrases.into_iter().map(|p| p.phrase).collect())
            }
            Err(err) => {
                tracing::warn!(stage = self.name(), error = %err, "stage fell back");
                StageOutcome::Degraded(Vec::new())
            }
        }
    }
}
