use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::analysis::AnalyzeError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Request-level error taxonomy.
///
/// Stage failures never appear here: they are absorbed at the stage
/// boundary and replaced by fallback values, so a degraded analysis still
/// returns 200. What remains is client-caused rejection (400) and
/// unexpected server defects (500).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal error");
        }

        // Flat `{"error": ...}` body, the service's wire format.
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<AnalyzeError> for ServiceError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::TextTooShort => ServiceError::Validation(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Internal(err.to_string())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Internal(format!("IO error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err: ServiceError = AnalyzeError::TextTooShort.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Text too short or empty");
    }

    #[test]
    fn internal_maps_to_500() {
        let err = ServiceError::Internal("boom".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ServiceError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
