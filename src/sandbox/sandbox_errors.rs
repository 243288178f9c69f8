use thiserror::Error;

/// Custom error type for the what-if sandbox store
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("Failed to read sandbox storage: {0}")]
    ReadFailed(String),

    #[error("Failed to write sandbox storage: {0}")]
    WriteFailed(String),

    #[error("Hypothetical deal not found: {0}")]
    DealNotFound(String),
}
