//! The analysis core: input normalization, the four analysis stages, and
//! the orchestrator that runs them against one shared normalized input.

pub mod embedding;
pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod sentiment;
pub mod stage;
pub mod summary;

pub use embedding::EmbeddingStage;
pub use keywords::KeywordStage;
pub use normalize::{normalize, NormalizedText, DEFAULT_MAX_INPUT_CHARS};
pub use pipeline::{
    AnalysisPipeline, AnalysisReport, AnalyzeError, Capabilities, PipelineConfig, MIN_TEXT_CHARS,
};
pub use sentiment::SentimentStage;
pub use stage::{AnalysisStage, StageOutcome};
pub use summary::SummaryStage;
