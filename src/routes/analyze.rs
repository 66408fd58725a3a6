use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::analysis::AnalysisReport;
use crate::error::ServiceResult;
use crate::state::AppState;

/// Request body for text analysis
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-form input text. Defaulted so a missing field is rejected by
    /// validation (400) instead of by body deserialization.
    #[serde(default)]
    pub text: String,
}

/// Analyze free-form text.
///
/// Runs the four analysis stages (sentiment, summary, keywords, embedding)
/// against one normalized copy of the input and returns the aggregated
/// report. The response shape is fixed: a stage that fails internally
/// contributes its documented fallback value and the request still
/// succeeds.
///
/// # Responses
/// - `200` — full report, possibly with fallback fields
/// - `400` — `{"error": "Text too short or empty"}` when the trimmed input
///   is shorter than 10 characters
/// - `500` — `{"error": ...}` on an unexpected defect outside the stage
///   boundaries
///
/// # Example
/// ```json
/// // Request
/// { "text": "The quick brown fox jumps over the lazy dog..." }
///
/// // Response
/// {
///   "sentiment": { "label": "NEUTRAL", "score": 0.5 },
///   "summary": "The quick brown fox jumps over the lazy dog...",
///   "keywords": ["quick brown", "lazy dog"],
///   "embedding": [0.04, -0.01],
///   "text_length": 120,
///   "processed_length": 120
/// }
/// ```
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> ServiceResult<Json<AnalysisReport>> {
    let report = state.pipeline.analyze(&request.text)?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_field_deserializes_to_empty() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
    }

    #[test]
    fn text_field_is_taken_verbatim() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"text": "  hello  "}"#).unwrap();
        assert_eq!(req.text, "  hello  ");
    }
}
