//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &ForYouConfig) -> Result<(), ConfigError> {
    validate_embedding_config(&config.embedding)?;
    validate_ranking_config(&config.ranking)?;

    Ok(())
}

/// Validate embedding configuration.
fn validate_embedding_config(config: &EmbeddingConfig) -> Result<(), ConfigError> {
    match config.provider {
        EmbeddingProvider::Cohere => {
            if config.model_name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Cohere model name cannot be empty".to_string(),
                ));
            }

            let url = config.service_url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "Embedding service URL must be http(s), got '{}'",
                    config.service_url
                )));
            }

            if config.timeout_secs == 0 {
                return Err(ConfigError::ValidationError(
                    "Embedding timeout_secs must be greater than 0".to_string(),
                ));
            }
        }
        EmbeddingProvider::Hashing => {
            if config.dimensions == 0 {
                return Err(ConfigError::ValidationError(
                    "Hashing embedder dimensions must be greater than 0".to_string(),
                ));
            }
        }
    }

    Ok(())
}

/// Validate ranking configuration.
pub(crate) fn validate_ranking_config(config: &RankingConfig) -> Result<(), ConfigError> {
    let fields = [
        ("top_k", config.top_k),
        ("target_size", config.target_size),
        ("max_per_artist", config.max_per_artist),
        ("max_per_genre", config.max_per_genre),
    ];

    for (name, value) in fields {
        if value == 0 {
            return Err(ConfigError::ValidationError(format!(
                "ranking.{} must be greater than 0",
                name
            )));
        }
    }

    Ok(())
}
