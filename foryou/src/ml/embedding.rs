//! Embedding service interface

use async_trait::async_trait;

use super::EmbeddingBatch;
use super::error::Result;

/// A service that turns texts into fixed-length dense vectors
///
/// Implementations must return exactly one vector per input text, in input
/// order. The pipeline issues a single batched call per request and applies
/// no retry or timeout of its own; adapters own that policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Embed a batch of texts
    async fn embed(&self, texts: &[String]) -> Result<EmbeddingBatch>;
}

