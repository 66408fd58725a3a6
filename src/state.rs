use std::sync::Arc;

use crate::analysis::{AnalysisPipeline, Capabilities};
use crate::config::ServiceConfig;

/// Shared application state
///
/// The pipeline (and the capabilities inside it) is built once at startup
/// and shared read-only across all requests; per-request state lives
/// entirely on the handler stack.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<ServiceConfig>,

    /// Analysis pipeline (shared across requests)
    pub pipeline: Arc<AnalysisPipeline>,
}

impl AppState {
    /// Create state with the in-crate deterministic capability backends.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_capabilities(config, Capabilities::local())
    }

    /// Create state with explicit capabilities. This is the injection seam
    /// for model-backed adapters and for test doubles.
    pub fn with_capabilities(config: ServiceConfig, capabilities: Capabilities) -> Self {
        let pipeline = Arc::new(AnalysisPipeline::new(&config.pipeline, capabilities));
        Self {
            config: Arc::new(config),
            pipeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_usable_immediately_after_construction() {
        let state = AppState::new(ServiceConfig::default());
        let report = state
            .pipeline
            .analyze("a perfectly reasonable request body")
            .unwrap();
        assert_eq!(report.text_length, report.processed_length);
    }
}
