//! API route handlers
//!
//! - `health`: liveness probe
//! - `analyze`: the text analysis endpoint

pub mod analyze;
pub mod health;

use crate::error::{ServiceError, ServiceResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /), no authentication, lists the available routes.
pub async fn api_info() -> ServiceResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Textlens",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/analyze",
            "/health"
        ]
    })))
}

/// 404 Not Found handler for undefined routes.
pub async fn not_found() -> ServiceError {
    ServiceError::NotFound
}
