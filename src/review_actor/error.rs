//! Error types for the Review store.

use thiserror::Error;

/// Errors that can occur during review operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    /// Rating outside 1..=5 or another malformed field.
    #[error("Review validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the store.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ReviewError {
    fn from(msg: String) -> Self {
        ReviewError::ActorCommunicationError(msg)
    }
}
