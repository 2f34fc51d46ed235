//! Error types for embedding and vectorization operations

use std::fmt;
use thiserror::Error;

/// Error type for ML collaborator operations
#[derive(Debug, Error)]
pub enum MLError {
    /// The embedding service returned unusable vectors
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// The embedding service could not be reached or rejected the call
    #[error("Embedding request failed: {0}")]
    Request(String),

    /// The embedding service returned a different number of vectors than texts sent
    #[error("Embedding count mismatch: sent {expected} texts, received {actual} vectors")]
    CountMismatch { expected: usize, actual: usize },

    /// Error related to collaborator configuration
    #[error("Model configuration error: {0}")]
    Configuration(String),
}

impl MLError {
    /// Create a new embedding error
    pub fn embedding(msg: impl fmt::Display) -> Self {
        Self::Embedding(msg.to_string())
    }

    /// Create a new request error
    pub fn request(msg: impl fmt::Display) -> Self {
        Self::Request(msg.to_string())
    }

    /// Create a new configuration error
    pub fn configuration(msg: impl fmt::Display) -> Self {
        Self::Configuration(msg.to_string())
    }
}

impl From<reqwest::Error> for MLError {
    fn from(err: reqwest::Error) -> Self {
        MLError::Request(err.to_string())
    }
}

/// Result type for ML operations
pub type Result<T> = std::result::Result<T, MLError>;
