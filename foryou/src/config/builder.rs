//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use std::path::Path;

/// Builder for creating ForYouConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: ForYouConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: ForYouConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ForYouConfig) -> Self {
        Self { config }
    }

    /// Use the Cohere embedding service with an explicit API key.
    pub fn with_cohere(mut self, api_key: impl Into<String>) -> Self {
        self.config.embedding.provider = EmbeddingProvider::Cohere;
        self.config.embedding.api_key = Some(api_key.into());
        self
    }

    /// Use the deterministic offline hashing embedder.
    pub fn with_offline_embeddings(mut self, dimensions: usize) -> Self {
        self.config.embedding.provider = EmbeddingProvider::Hashing;
        self.config.embedding.dimensions = dimensions;
        self
    }

    /// Set the embedding model name.
    pub fn with_embedding_model(mut self, model_name: impl Into<String>) -> Self {
        self.config.embedding.model_name = model_name.into();
        self
    }

    /// Set the embedding service base URL.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.config.embedding.service_url = url.into();
        self
    }

    /// Set the embedding request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.embedding.timeout_secs = timeout_secs;
        self
    }

    /// Set the shortlist size.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.config.ranking.top_k = top_k;
        self
    }

    /// Set the size the diversity re-ranker backfills towards.
    pub fn with_target_size(mut self, target_size: usize) -> Self {
        self.config.ranking.target_size = target_size;
        self
    }

    /// Set the per-artist cap.
    pub fn with_max_per_artist(mut self, max_per_artist: usize) -> Self {
        self.config.ranking.max_per_artist = max_per_artist;
        self
    }

    /// Set the per-genre cap.
    pub fn with_max_per_genre(mut self, max_per_genre: usize) -> Self {
        self.config.ranking.max_per_genre = max_per_genre;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use default logging configuration (JSON console output at Info level)
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging.level = LogLevel::Info;
        self.config.logging.format = LogFormat::Json;
        self.config.logging.file = None;
        self.config.logging.stdout = true;
        self
    }

    /// Create a configuration for local development.
    ///
    /// Uses the offline hashing embedder and debug-level pretty logs.
    pub fn development() -> Self {
        Self::new()
            .with_offline_embeddings(crate::ml::hashing::DEFAULT_HASHING_DIMENSIONS)
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a configuration for automated testing.
    pub fn testing() -> Self {
        Self::development().with_log_format(LogFormat::Compact)
    }

    /// Create a production-ready configuration backed by Cohere.
    ///
    /// The API key is read from `COHERE_API_KEY` when the service is built.
    pub fn production() -> Self {
        Self::new().with_default_logging()
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<ForYouConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
