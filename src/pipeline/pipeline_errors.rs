use thiserror::Error;

/// Custom error type for pipeline deal operations
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Pipeline deal not found: {0}")]
    NotFound(String),

    #[error("Unknown pipeline stage: {0}")]
    UnknownStage(String),
}
