//! Cohere embedding service adapter
//!
//! Sends the whole batch in one `POST {service_url}/embed` call.
//!
//! ```no_run
//! use foryou::ml::{CohereEmbeddingService, EmbeddingService};
//!
//! async fn example() -> foryou::ml::Result<()> {
//!     let service = CohereEmbeddingService::new("my-api-key")?;
//!     let vectors = service.embed(&["pop Adele english".to_string()]).await?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::EmbeddingBatch;
use super::embedding::EmbeddingService;
use super::error::{MLError, Result};
use crate::config::EmbeddingConfig;

/// Default Cohere API base URL
pub const DEFAULT_COHERE_URL: &str = "https://api.cohere.ai/v1";

/// Default Cohere embedding model
pub const DEFAULT_COHERE_MODEL: &str = "large";

/// Environment variable consulted when no API key is configured
pub const COHERE_API_KEY_ENV: &str = "COHERE_API_KEY";

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    texts: &'a [String],
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: EmbeddingBatch,
}

/// Embedding service backed by the Cohere `embed` endpoint
#[derive(Clone)]
pub struct CohereEmbeddingService {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl fmt::Debug for CohereEmbeddingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CohereEmbeddingService")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

impl CohereEmbeddingService {
    /// Create a service with the default URL, model and a 30 second timeout
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(
            api_key,
            DEFAULT_COHERE_URL,
            DEFAULT_COHERE_MODEL,
            Duration::from_secs(30),
        )
    }

    /// Create a service with explicit endpoint settings
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(MLError::configuration("Cohere API key cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MLError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }

    /// Create a service from configuration, falling back to `COHERE_API_KEY`
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self> {
        let api_key = match &config.api_key {
            Some(key) => key.clone(),
            None => std::env::var(COHERE_API_KEY_ENV).map_err(|_| {
                MLError::configuration(format!(
                    "No Cohere API key configured. Set embedding.api_key or the {} environment variable",
                    COHERE_API_KEY_ENV
                ))
            })?,
        };

        Self::with_options(
            api_key,
            config.service_url.as_str(),
            config.model_name.as_str(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// The model name sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/embed", self.base_url)
    }
}

#[async_trait]
impl EmbeddingService for CohereEmbeddingService {
    async fn embed(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        debug!(
            count = texts.len(),
            model = %self.model,
            "Requesting Cohere embeddings"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                texts,
                model: &self.model,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Cohere embed call failed");
            return Err(MLError::request(format!(
                "Cohere returned {}: {}",
                status, body
            )));
        }

        let payload: EmbedResponse = response
            .json()
            .await
            .map_err(|e| MLError::embedding(format!("Invalid Cohere response: {}", e)))?;

        Ok(payload.embeddings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = CohereEmbeddingService::new("   ");
        assert!(matches!(result, Err(MLError::Configuration(_))));
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let service = CohereEmbeddingService::with_options(
            "key",
            "http://localhost:9000/v1/",
            "embed-english-v3.0",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(service.endpoint(), "http://localhost:9000/v1/embed");
        assert_eq!(service.model(), "embed-english-v3.0");
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let service = CohereEmbeddingService::new("sk-live-12345").unwrap();
        let printed = format!("{:?}", service);
        assert!(!printed.contains("sk-live-12345"));
        assert!(printed.contains("api_key: \"***\""));
        assert!(printed.contains(DEFAULT_COHERE_MODEL));
    }

    #[test]
    fn test_from_config_prefers_explicit_key() {
        let config = EmbeddingConfig {
            api_key: Some("explicit".to_string()),
            ..Default::default()
        };
        let service = CohereEmbeddingService::from_config(&config).unwrap();
        assert_eq!(service.api_key, "explicit");
        assert_eq!(service.model(), DEFAULT_COHERE_MODEL);
    }

    #[test]
    fn test_request_body_shape() {
        let texts = vec!["a".to_string(), "b".to_string()];
        let body = serde_json::to_value(EmbedRequest {
            texts: &texts,
            model: "large",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"texts": ["a", "b"], "model": "large"}));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_request_error() {
        let service = CohereEmbeddingService::with_options(
            "key",
            "http://127.0.0.1:9",
            "large",
            Duration::from_millis(500),
        )
        .unwrap();

        let result = service.embed(&["text".to_string()]).await;
        assert!(matches!(result, Err(MLError::Request(_))));
    }
}
