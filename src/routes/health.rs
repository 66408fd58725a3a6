use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Health check endpoint (liveness)
///
/// Always succeeds while the process is up. The body is part of the wire
/// contract consumed by deploy liveness checks, so the two fields are
/// fixed.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "NLP service is running",
    }))
}
