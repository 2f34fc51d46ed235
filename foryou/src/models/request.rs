//! Request and response envelopes for a single recommendation call.

use serde::{Deserialize, Serialize};

use super::{CatalogItem, User};
use crate::evaluation::AccuracyMetrics;

/// A recommendation request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Identifier of the user to recommend for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// The full user roster
    #[serde(default)]
    pub user_data: UserRoster,

    /// The catalog to rank
    #[serde(default)]
    pub songs_data: Vec<CatalogItem>,
}

impl RecommendationRequest {
    /// Create a request for one user
    pub fn new(user_id: impl Into<String>, users: Vec<User>, catalog: Vec<CatalogItem>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            user_data: UserRoster { users },
            songs_data: catalog,
        }
    }
}

/// The user roster section of a request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserRoster {
    /// All known users
    pub users: Vec<User>,
}

/// The result of a recommendation call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// Diversity-reranked recommendations, each as originally supplied
    pub recommended_songs: Vec<CatalogItem>,

    /// Retrieval-quality metrics for the recommendations
    pub accuracy_metrics: AccuracyMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_parses_original_payload_shape() {
        let request: RecommendationRequest = serde_json::from_str(
            r#"{
                "userId": "u1",
                "userData": {"users": [{"userId": "u1"}]},
                "songsData": [{"id": "s1", "artistName": "Adele"}]
            }"#,
        )
        .unwrap();

        assert_eq!(request.user_id.as_deref(), Some("u1"));
        assert_eq!(request.user_data.users.len(), 1);
        assert_eq!(request.songs_data[0].artist_name, "Adele");
    }

    #[test]
    fn test_request_tolerates_missing_sections() {
        let request: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.user_id, None);
        assert!(request.user_data.users.is_empty());
        assert!(request.songs_data.is_empty());
    }
}
