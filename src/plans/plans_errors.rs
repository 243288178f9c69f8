use thiserror::Error;

/// Custom error type for sales plan operations
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Plan not found: {0}")]
    NotFound(String),

    #[error("Invalid approval transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Plan cannot be edited while in status '{0}'")]
    NotEditable(String),

    #[error("Unknown approval status: {0}")]
    UnknownStatus(String),
}
