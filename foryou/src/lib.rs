//! # ForYou
//!
//! Personalized music recommendations from a single request snapshot: a
//! user's stated preferences and listening history are scored against a
//! catalog with two independent similarity signals, the best matches are
//! shortlisted, and the shortlist is re-ranked so no artist or genre
//! dominates it.
//!
//! ## Quick Start
//!
//! ```rust
//! use foryou::prelude::*;
//!
//! async fn example() -> Result<()> {
//!     // Offline embeddings, no API key needed
//!     let config = ConfigBuilder::testing().build()?;
//!     let recommender = foryou::init(config).await?;
//!
//!     let user = User::new("u1").liked(TrackRef::new("s1", "Adele").genre("pop"));
//!     let catalog = vec![
//!         CatalogItem::new("s1", "Adele").genre("pop"),
//!         CatalogItem::new("s2", "Drake").genre("hiphop"),
//!     ];
//!
//!     let request = RecommendationRequest::new("u1", vec![user], catalog);
//!     let response = recommender.recommend(&request).await?;
//!     println!("{} songs", response.recommended_songs.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Profile**: preferences and history flattened into one text
//! - **Scoring**: semantic similarity (embedding service) and lexical
//!   similarity (TF-IDF), averaged
//! - **Selection**: top 14 by combined score, ties in catalog order
//! - **Diversity**: at most 2 per artist, then at most 2 per genre, with
//!   backfill to keep 14
//! - **Evaluation**: precision, recall, F1 and accuracy against the songs
//!   the user already liked or streamed
//!
//! The embedding service is pluggable through [`ml::EmbeddingService`]. Cohere
//! is the production default; [`ml::HashingEmbeddingService`] runs offline.

pub mod config;
pub mod core;
pub mod evaluation;
pub mod logging;
pub mod ml;
pub mod models;
pub mod profile;
pub mod ranking;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::init;

    // Configuration
    pub use crate::config::{
        ConfigBuilder, ConfigLoader, EmbeddingConfig, EmbeddingProvider, ForYouConfig, LogFormat,
        LogLevel, RankingConfig,
    };

    // Pipeline
    pub use crate::core::{Recommender, RecommenderBuilder};
    pub use crate::evaluation::{AccuracyMetrics, EvaluationStatus};
    pub use crate::ml::{EmbeddingService, LexicalVectorizer};

    // Wire types
    pub use crate::models::{
        CatalogItem, Preferences, RecommendationRequest, RecommendationResponse, TrackRef, User,
    };

    pub use crate::{ForYouError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for recommendation requests
#[derive(Debug, thiserror::Error)]
pub enum ForYouError {
    /// The request is missing its user id or roster
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The user id matches nobody in the roster
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    /// The embedding call failed or returned an unusable batch
    #[error("Embedding service error: {0}")]
    EmbeddingService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),
}

impl ForYouError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ForYouError::InvalidRequest(_) => "INVALID_REQUEST",
            ForYouError::UserNotFound { .. } => "USER_NOT_FOUND",
            ForYouError::EmbeddingService(_) => "EMBEDDING_SERVICE_ERROR",
            ForYouError::Configuration(_) => "CONFIGURATION_ERROR",
            ForYouError::Logging(_) => "LOGGING_ERROR",
        }
    }

    /// Whether the caller broke the request contract (as opposed to a
    /// dependency or server-side failure)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ForYouError::InvalidRequest(_) | ForYouError::UserNotFound { .. }
        )
    }
}

impl From<crate::config::ConfigError> for ForYouError {
    fn from(err: crate::config::ConfigError) -> Self {
        ForYouError::Configuration(err.to_string())
    }
}

impl From<crate::ml::MLError> for ForYouError {
    fn from(err: crate::ml::MLError) -> Self {
        match err {
            crate::ml::MLError::Configuration(msg) => ForYouError::Configuration(msg),
            other => ForYouError::EmbeddingService(other.to_string()),
        }
    }
}

/// Result type for recommendation operations
pub type Result<T> = std::result::Result<T, ForYouError>;

/// Initialize logging and build a [`core::Recommender`] from configuration
///
/// Logging is installed only if no global subscriber exists yet, so
/// applications that set up their own `tracing` subscriber keep it.
///
/// # Examples
///
/// ```rust
/// use foryou::prelude::*;
///
/// async fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_offline_embeddings(128)
///         .with_max_per_artist(1)
///         .build()?;
///
///     let recommender = init(config).await?;
///     assert_eq!(recommender.provider(), "hashing");
///     Ok(())
/// }
/// ```
pub async fn init(config: config::ForYouConfig) -> Result<core::Recommender> {
    logging::init(&config.logging)?;
    core::Recommender::from_config(&config)
}
