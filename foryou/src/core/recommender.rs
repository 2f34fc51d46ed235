//! The recommendation pipeline for a single request
//!
//! A request is handled end to end without shared mutable state: the user is
//! resolved from the roster, the profile and catalog texts are built, the
//! catalog is scored and ranked, the shortlist is diversified, and the final
//! list is evaluated against the user's history. Any failure aborts the
//! whole request; partial results are never returned.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::{EmbeddingProvider, ForYouConfig, RankingConfig};
use crate::evaluation::evaluate;
use crate::ml::{
    CohereEmbeddingService, EmbeddingManager, EmbeddingService, HashingEmbeddingService,
    LexicalVectorizer, TfidfVectorizer,
};
use crate::models::{CatalogItem, RecommendationRequest, RecommendationResponse, User};
use crate::profile::{build_user_profile, catalog_texts};
use crate::ranking::{DiversityConstraint, DiversityReranker, DualSimilarityScorer, TopKSelector};
use crate::{ForYouError, Result};

/// Find the requesting user in the roster.
///
/// Fails with [`ForYouError::InvalidRequest`] when the roster is empty or the
/// user id is missing or blank, and with [`ForYouError::UserNotFound`] when no
/// roster entry matches.
pub fn resolve_user(request: &RecommendationRequest) -> Result<&User> {
    let users = &request.user_data.users;
    let user_id = match request.user_id.as_deref() {
        Some(id) if !id.is_empty() && !users.is_empty() => id,
        _ => {
            return Err(ForYouError::InvalidRequest(
                "Missing userId or userData".to_string(),
            ));
        }
    };

    users
        .iter()
        .find(|user| user.user_id == user_id)
        .ok_or_else(|| ForYouError::UserNotFound {
            user_id: user_id.to_string(),
        })
}

/// Runs the scoring, ranking, diversity and evaluation stages
pub struct Recommender {
    scorer: DualSimilarityScorer,
    selector: TopKSelector,
    reranker: DiversityReranker,
    target_size: usize,
    provider: String,
}

impl Recommender {
    /// Start building a recommender around an embedding service
    pub fn builder(embedder: Arc<dyn EmbeddingService>) -> RecommenderBuilder {
        RecommenderBuilder::new(embedder)
    }

    /// Create a recommender from configuration
    ///
    /// The Cohere provider needs an API key, either in the configuration or
    /// in the `COHERE_API_KEY` environment variable.
    pub fn from_config(config: &ForYouConfig) -> Result<Self> {
        let embedding = &config.embedding;
        let embedder: Arc<dyn EmbeddingService> = match embedding.provider {
            EmbeddingProvider::Cohere => Arc::new(CohereEmbeddingService::from_config(embedding)?),
            EmbeddingProvider::Hashing => {
                Arc::new(HashingEmbeddingService::new(embedding.dimensions))
            }
        };

        let mut builder = Self::builder(embedder)
            .ranking(config.ranking)
            .provider_name(embedding.provider.to_string());
        if embedding.provider == EmbeddingProvider::Hashing {
            builder = builder.manager(EmbeddingManager::with_expected_dimensions(
                embedding.dimensions,
            ));
        }
        Ok(builder.build())
    }

    /// Name of the embedding provider, for logs and diagnostics
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Handle a full request: validate it, then recommend for its user
    pub async fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResponse> {
        let user = resolve_user(request)?;
        self.recommend_for_user(user, &request.songs_data).await
    }

    /// Recommend from `catalog` for an already resolved user
    pub async fn recommend_for_user(
        &self,
        user: &User,
        catalog: &[CatalogItem],
    ) -> Result<RecommendationResponse> {
        let profile = build_user_profile(user);

        let recommended = if catalog.is_empty() {
            debug!(user_id = %user.user_id, "Empty catalog, skipping scoring");
            Vec::new()
        } else {
            self.rank(user, &profile, catalog).await?
        };

        let metrics = evaluate(user, &recommended);
        info!(
            user_id = %user.user_id,
            provider = %self.provider,
            catalog = catalog.len(),
            recommended = recommended.len(),
            status = ?metrics.status,
            "Recommendation complete"
        );

        Ok(RecommendationResponse {
            recommended_songs: recommended,
            accuracy_metrics: metrics,
        })
    }

    async fn rank(&self, user: &User, profile: &str, catalog: &[CatalogItem]) -> Result<Vec<CatalogItem>> {
        let texts = catalog_texts(catalog);
        let scores = self.scorer.score(&texts, profile).await.map_err(|e| {
            error!(user_id = %user.user_id, provider = %self.provider, error = %e, "Embedding service failed");
            ForYouError::from(e)
        })?;

        let combined = scores.combined();
        let ranked = self.selector.ranked_items(catalog, &combined);
        debug!(
            shortlisted = ranked.len(),
            top_score = combined.iter().copied().fold(f32::NEG_INFINITY, f32::max),
            "Selected top items"
        );

        let mut diversified = self.reranker.rerank(&ranked);
        diversified.truncate(self.target_size);
        Ok(diversified)
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("selector", &self.selector)
            .field("reranker", &self.reranker)
            .field("target_size", &self.target_size)
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Recommender`]
pub struct RecommenderBuilder {
    embedder: Arc<dyn EmbeddingService>,
    vectorizer: Arc<dyn LexicalVectorizer>,
    manager: EmbeddingManager,
    ranking: RankingConfig,
    provider: String,
}

impl RecommenderBuilder {
    fn new(embedder: Arc<dyn EmbeddingService>) -> Self {
        Self {
            embedder,
            vectorizer: Arc::new(TfidfVectorizer::new()),
            manager: EmbeddingManager::new(),
            ranking: RankingConfig::default(),
            provider: "custom".to_string(),
        }
    }

    /// Replace the TF-IDF vectorizer
    pub fn vectorizer(mut self, vectorizer: Arc<dyn LexicalVectorizer>) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Replace the embedding batch validator
    pub fn manager(mut self, manager: EmbeddingManager) -> Self {
        self.manager = manager;
        self
    }

    /// Set shortlist size and diversity caps
    pub fn ranking(mut self, ranking: RankingConfig) -> Self {
        self.ranking = ranking;
        self
    }

    /// Label used for the embedding provider in logs
    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider = name.into();
        self
    }

    pub fn build(self) -> Recommender {
        Recommender {
            scorer: DualSimilarityScorer::new(self.embedder, self.vectorizer).with_manager(self.manager),
            selector: TopKSelector::new(self.ranking.top_k),
            reranker: DiversityReranker::new(DiversityConstraint::from(&self.ranking)),
            target_size: self.ranking.target_size,
            provider: self.provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::EvaluationStatus;
    use crate::ml::{MLError, MockEmbeddingService};
    use crate::models::TrackRef;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("s1", "Adele").genre("pop").language("english"),
            CatalogItem::new("s2", "Drake").genre("hiphop").language("english"),
            CatalogItem::new("s3", "Rosalia").genre("flamenco").language("spanish"),
        ]
    }

    fn request() -> RecommendationRequest {
        let user = User::new("u1").liked(TrackRef::new("s1", "Adele").genre("pop"));
        RecommendationRequest::new("u1", vec![user], catalog())
    }

    fn recommender(mock: MockEmbeddingService) -> Recommender {
        Recommender::builder(Arc::new(mock)).build()
    }

    #[tokio::test]
    async fn test_missing_user_id_is_invalid() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed().never();

        let mut req = request();
        req.user_id = None;
        let err = recommender(mock).recommend(&req).await.unwrap_err();
        assert!(matches!(err, ForYouError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_empty_roster_is_invalid() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed().never();

        let mut req = request();
        req.user_data.users.clear();
        let err = recommender(mock).recommend(&req).await.unwrap_err();
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_unknown_user_fails_before_embedding() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed().never();

        let mut req = request();
        req.user_id = Some("ghost".to_string());
        let err = recommender(mock).recommend(&req).await.unwrap_err();
        assert!(matches!(err, ForYouError::UserNotFound { ref user_id } if user_id == "ghost"));
    }

    #[tokio::test]
    async fn test_embedding_failure_aborts_request() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed()
            .times(1)
            .returning(|_| Err(MLError::request("HTTP 503")));

        let err = recommender(mock).recommend(&request()).await.unwrap_err();
        assert!(matches!(err, ForYouError::EmbeddingService(_)));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_short_batch_aborts_request() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed()
            .returning(|texts: &[String]| Ok(vec![vec![1.0, 0.0]; texts.len() - 1]));

        let err = recommender(mock).recommend(&request()).await.unwrap_err();
        assert!(matches!(err, ForYouError::EmbeddingService(_)));
    }

    #[tokio::test]
    async fn test_semantic_signal_drives_order() {
        let mut mock = MockEmbeddingService::new();
        // items s1, s2, s3 then the profile
        mock.expect_embed().times(1).returning(|_| {
            Ok(vec![
                vec![0.0, 1.0],
                vec![1.0, 0.0],
                vec![0.8, 0.6],
                vec![1.0, 0.0],
            ])
        });

        let response = recommender(mock).recommend(&request()).await.unwrap();
        let ids: Vec<&str> = response.recommended_songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s3", "s1"]);
        assert_eq!(response.accuracy_metrics.status, EvaluationStatus::Evaluated);
        assert!((response.accuracy_metrics.precision.unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_empty_catalog_skips_embedding() {
        let mut mock = MockEmbeddingService::new();
        mock.expect_embed().never();

        let mut req = request();
        req.songs_data.clear();
        let response = recommender(mock).recommend(&req).await.unwrap();
        assert!(response.recommended_songs.is_empty());
        assert_eq!(response.accuracy_metrics.precision, Some(0.0));
    }

    #[test]
    fn test_from_config_offline() {
        let config = crate::config::ConfigBuilder::testing()
            .with_max_per_artist(1)
            .build()
            .unwrap();
        let recommender = Recommender::from_config(&config).unwrap();
        assert_eq!(recommender.provider(), "hashing");

        let response = tokio_test::block_on(recommender.recommend(&request())).unwrap();
        assert_eq!(response.recommended_songs.len(), 3);
    }
}
