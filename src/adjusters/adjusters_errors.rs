use thiserror::Error;

/// Custom error type for adjuster directory and rating operations
#[derive(Debug, Error)]
pub enum AdjusterError {
    #[error("Adjuster not found: {0}")]
    NotFound(String),

    #[error("Invalid rating: {0}")]
    InvalidRating(String),
}
