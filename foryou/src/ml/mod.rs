//! Collaborator adapters and vector math for the similarity scorer
//!
//! The pipeline consumes two black-box collaborators:
//! - an [`EmbeddingService`] turning texts into dense vectors (semantic signal)
//! - a [`LexicalVectorizer`] turning texts into term-weight rows (lexical signal)
//!
//! Both are passed in explicitly, so tests and offline runs can substitute
//! deterministic implementations.
//!
//! ## Example Usage
//!
//! ```rust
//! use foryou::ml::{EmbeddingService, HashingEmbeddingService};
//!
//! async fn example() -> foryou::ml::Result<()> {
//!     let service = HashingEmbeddingService::new(64);
//!     let vectors = service.embed(&["pop Adele english".to_string()]).await?;
//!     assert_eq!(vectors[0].len(), 64);
//!     Ok(())
//! }
//! ```

pub mod cohere;
pub mod embedding;
pub mod error;
pub mod hashing;
pub mod model_manager;
pub mod tfidf;
pub mod vector;

pub use cohere::CohereEmbeddingService;
pub use embedding::EmbeddingService;
#[cfg(test)]
pub use embedding::MockEmbeddingService;
pub use error::{MLError, Result};
pub use hashing::HashingEmbeddingService;
pub use model_manager::EmbeddingManager;
pub use tfidf::{LexicalVectorizer, TfidfVectorizer};
pub use vector::SparseRow;

// Type aliases for convenience
pub type EmbeddingVector = Vec<f32>;
pub type EmbeddingBatch = Vec<EmbeddingVector>;
