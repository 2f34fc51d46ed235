//! Scoring and ranking pipeline stages
//!
//! Stages run strictly in order:
//!
//! 1. [`DualSimilarityScorer`] produces semantic and lexical similarity of
//!    the user profile against every catalog item
//! 2. [`fuse_scores`] averages the two signals into one combined score
//! 3. [`TopKSelector`] takes the best `k` items by combined score
//! 4. [`DiversityReranker`] caps repeated artists, then repeated genres,
//!    backfilling to keep the list at its target size
//!
//! # Example
//!
//! ```
//! use foryou::ranking::{fuse_scores, TopKSelector};
//!
//! let combined = fuse_scores(&[0.2, 0.9, 0.4], &[0.0, 0.5, 0.8]);
//! let selector = TopKSelector::new(2);
//! assert_eq!(selector.select(&combined), vec![1, 2]);
//! ```

pub mod diversity;
pub mod fusion;
pub mod scorer;
pub mod selector;

pub use diversity::{DiversityConstraint, DiversityReranker, cap_and_backfill};
pub use fusion::fuse_scores;
pub use scorer::{DualSimilarityScorer, SimilarityScores};
pub use selector::TopKSelector;
