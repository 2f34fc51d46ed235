//! Dual similarity scoring of a user profile against catalog texts
//!
//! The profile text is appended after the item texts and the whole batch
//! goes to the embedding service in one call, so the profile lands in the
//! same vector space as the items. The lexical vectorizer is fitted on the
//! same batch, making the profile part of its vocabulary and document
//! frequencies.

use std::sync::Arc;

use tracing::debug;

use crate::ml::vector::{cosine_similarities, sparse_cosine_similarities};
use crate::ml::{EmbeddingManager, EmbeddingService, LexicalVectorizer, MLError, Result};

/// Index-aligned similarity scores for every catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityScores {
    semantic: Vec<f32>,
    lexical: Vec<f32>,
}

impl SimilarityScores {
    /// Pair the two signals, rejecting vectors of different lengths
    pub fn new(semantic: Vec<f32>, lexical: Vec<f32>) -> Result<Self> {
        if semantic.len() != lexical.len() {
            return Err(MLError::CountMismatch {
                expected: semantic.len(),
                actual: lexical.len(),
            });
        }
        Ok(Self { semantic, lexical })
    }

    /// Cosine similarity in embedding space
    pub fn semantic(&self) -> &[f32] {
        &self.semantic
    }

    /// Cosine similarity in TF-IDF space
    pub fn lexical(&self) -> &[f32] {
        &self.lexical
    }

    /// Number of scored items
    pub fn len(&self) -> usize {
        self.semantic.len()
    }

    /// Whether no items were scored
    pub fn is_empty(&self) -> bool {
        self.semantic.is_empty()
    }

    /// Elementwise mean of the two signals
    pub fn combined(&self) -> Vec<f32> {
        super::fuse_scores(&self.semantic, &self.lexical)
    }
}

/// Computes semantic and lexical similarity of a profile to each item
pub struct DualSimilarityScorer {
    embedder: Arc<dyn EmbeddingService>,
    vectorizer: Arc<dyn LexicalVectorizer>,
    manager: EmbeddingManager,
}

impl DualSimilarityScorer {
    /// Create a scorer from its two collaborators
    pub fn new(embedder: Arc<dyn EmbeddingService>, vectorizer: Arc<dyn LexicalVectorizer>) -> Self {
        Self {
            embedder,
            vectorizer,
            manager: EmbeddingManager::new(),
        }
    }

    /// Replace the batch validator, e.g. to pin the embedding dimension
    pub fn with_manager(mut self, manager: EmbeddingManager) -> Self {
        self.manager = manager;
        self
    }

    /// Score `profile` against every text in `item_texts`.
    ///
    /// Exactly one embedding call is made, with `item_texts.len() + 1`
    /// texts. Any service failure, a vector count other than that, or a
    /// malformed vector aborts scoring.
    pub async fn score(&self, item_texts: &[String], profile: &str) -> Result<SimilarityScores> {
        let mut texts = Vec::with_capacity(item_texts.len() + 1);
        texts.extend_from_slice(item_texts);
        texts.push(profile.to_string());

        debug!(texts = texts.len(), "Requesting embeddings");
        let mut embeddings = self.embedder.embed(&texts).await?;
        self.manager.validate_batch(&embeddings, texts.len())?;
        self.manager.normalize_batch(&mut embeddings);

        let semantic = match embeddings.split_last() {
            Some((profile_vector, item_vectors)) => cosine_similarities(profile_vector, item_vectors),
            None => Vec::new(),
        };

        let rows = self.vectorizer.fit_transform(&texts);
        if rows.len() != texts.len() {
            return Err(MLError::CountMismatch {
                expected: texts.len(),
                actual: rows.len(),
            });
        }
        let lexical = match rows.split_last() {
            Some((profile_row, item_rows)) => sparse_cosine_similarities(profile_row, item_rows),
            None => Vec::new(),
        };

        debug!(items = item_texts.len(), "Scored catalog");
        SimilarityScores::new(semantic, lexical)
    }
}

impl std::fmt::Debug for DualSimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DualSimilarityScorer")
            .field("manager", &self.manager)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{HashingEmbeddingService, MockEmbeddingService, TfidfVectorizer};

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn scorer_with(mock: MockEmbeddingService) -> DualSimilarityScorer {
        DualSimilarityScorer::new(Arc::new(mock), Arc::new(TfidfVectorizer::new()))
    }

    #[tokio::test]
    async fn test_profile_is_appended_last_in_a_single_call() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed()
            .times(1)
            .withf(|texts: &[String]| texts.len() == 3 && texts[2] == "the profile")
            .returning(|_| Ok(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]]));

        let scores = scorer_with(mock)
            .score(&texts(&["pop Adele", "rock Drake"]), "the profile")
            .await
            .unwrap();

        assert_eq!(scores.len(), 2);
        assert!((scores.semantic()[0] - 1.0).abs() < 1e-6);
        assert!(scores.semantic()[1].abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_lexical_signal_uses_shared_vocabulary() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed()
            .returning(|texts: &[String]| Ok(vec![vec![1.0, 1.0]; texts.len()]));

        let scores = scorer_with(mock)
            .score(&texts(&["pop Adele english", "metal Slayer"]), "pop Adele english")
            .await
            .unwrap();

        assert!((scores.lexical()[0] - 1.0).abs() < 1e-5);
        assert_eq!(scores.lexical()[1], 0.0);
    }

    #[tokio::test]
    async fn test_count_mismatch_is_an_error() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed()
            .returning(|_| Ok(vec![vec![1.0, 0.0]]));

        let err = scorer_with(mock)
            .score(&texts(&["a song", "another"]), "profile")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MLError::CountMismatch {
                expected: 3,
                actual: 1
            }
        ));
    }

    #[tokio::test]
    async fn test_service_failure_propagates() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed()
            .returning(|_| Err(MLError::request("connection refused")));

        let result = scorer_with(mock).score(&texts(&["song"]), "profile").await;
        assert!(matches!(result, Err(MLError::Request(_))));
    }

    #[tokio::test]
    async fn test_scores_are_bounded() {
        let scorer = DualSimilarityScorer::new(
            Arc::new(HashingEmbeddingService::new(32)),
            Arc::new(TfidfVectorizer::new()),
        );
        let scores = scorer
            .score(
                &texts(&["pop Adele english", "rock Queen english", "jazz Miles"]),
                "pop rock english Adele",
            )
            .await
            .unwrap();

        for value in scores.semantic().iter().chain(scores.lexical()) {
            assert!((-1.0 - 1e-5..=1.0 + 1e-5).contains(value));
        }
        assert_eq!(scores.combined().len(), 3);
    }

    #[test]
    fn test_mismatched_signals_rejected() {
        assert!(SimilarityScores::new(vec![0.1], vec![]).is_err());
    }
}
