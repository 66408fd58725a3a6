//! Textlens - HTTP NLP analysis service
//!
//! A single-endpoint service that accepts free-form text and returns four
//! independently computed analyses: sentiment classification,
//! summarization, keyphrase extraction, and a dense vector embedding.
//!
//! The interesting part is the orchestration, not the HTTP plumbing: four
//! heterogeneous stages share one length-normalized copy of the input,
//! each applies its own input window and fallback policy, and a failure in
//! any stage is absorbed at that stage's boundary so the response always
//! has the same shape. Clients distinguish a degraded result by field
//! values (e.g. `label == "UNKNOWN"`), not by schema.
//!
//! # Layers
//!
//! - [`capability`] — the injected analysis functions (traits plus
//!   deterministic local backends)
//! - [`analysis`] — normalization, the four stages, and the pipeline
//!   orchestrator
//! - [`routes`] / [`server`] — the Axum HTTP surface
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use textlens::ServiceConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServiceConfig::load()?;
//!     textlens::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Endpoints
//!
//! - `POST /analyze` — analyze one text, fixed-shape JSON report
//! - `GET /health` — liveness probe
//! - `GET /` — API information

pub mod analysis;
pub mod capability;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use analysis::{AnalysisPipeline, AnalysisReport, AnalyzeError, Capabilities, PipelineConfig};
pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use server::{build_router, start_server};
pub use state::AppState;
