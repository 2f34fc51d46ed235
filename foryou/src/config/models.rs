//! Configuration model definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::ml::cohere::{DEFAULT_COHERE_MODEL, DEFAULT_COHERE_URL};
use crate::ml::hashing::DEFAULT_HASHING_DIMENSIONS;

/// Main configuration structure for ForYou.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ForYouConfig {
    /// Embedding collaborator configuration
    pub embedding: EmbeddingConfig,

    /// Ranking and diversity parameters
    pub ranking: RankingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ForYouConfig {
    /// A copy safe to print: the API key, if any, is masked
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.embedding.api_key.is_some() {
            config.embedding.api_key = Some("***".to_string());
        }
        config
    }
}

/// Embedding collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Which embedding service to use
    pub provider: EmbeddingProvider,

    /// Model name sent to the remote service
    pub model_name: String,

    /// Remote service base URL
    pub service_url: String,

    /// API key; when unset the provider's environment variable is used
    pub api_key: Option<String>,

    /// Request timeout for the remote service, in seconds
    pub timeout_secs: u64,

    /// Output dimension of the offline hashing embedder
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProvider::Cohere,
            model_name: DEFAULT_COHERE_MODEL.to_string(),
            service_url: DEFAULT_COHERE_URL.to_string(),
            api_key: None,
            timeout_secs: 30,
            dimensions: DEFAULT_HASHING_DIMENSIONS,
        }
    }
}

/// Embedding service selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    /// Cohere `embed` API
    Cohere,

    /// Deterministic offline feature hashing
    Hashing,
}

impl fmt::Display for EmbeddingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingProvider::Cohere => write!(f, "cohere"),
            EmbeddingProvider::Hashing => write!(f, "hashing"),
        }
    }
}

/// Ranking and diversity parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RankingConfig {
    /// Size of the shortlist taken from the combined ranking
    pub top_k: usize,

    /// Size the diversity re-ranker backfills towards
    pub target_size: usize,

    /// Maximum items per artist before backfill
    pub max_per_artist: usize,

    /// Maximum items per genre before backfill
    pub max_per_genre: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: 14,
            target_size: 14,
            max_per_artist: 2,
            max_per_genre: 2,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
