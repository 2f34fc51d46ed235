//! Precision, recall, F1 and accuracy against the user's own history.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CatalogItem, User};

/// Message reported alongside undefined metrics
pub const NO_GROUND_TRUTH_MESSAGE: &str = "No ground truth available for this user.";

/// Whether the metrics could be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// Metrics were computed
    Evaluated,
    /// The user has no liked or streamed items; metrics are undefined
    NoGroundTruth,
}

/// Metrics for one recommendation list
///
/// All four values are `None` (serialized as `null`) exactly when the status
/// is [`EvaluationStatus::NoGroundTruth`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    pub status: EvaluationStatus,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AccuracyMetrics {
    /// Metrics for a user without history
    pub fn no_ground_truth() -> Self {
        Self {
            status: EvaluationStatus::NoGroundTruth,
            precision: None,
            recall: None,
            f1: None,
            accuracy: None,
            message: Some(NO_GROUND_TRUTH_MESSAGE.to_string()),
        }
    }

    /// Whether numeric metrics are present
    pub fn is_evaluated(&self) -> bool {
        self.status == EvaluationStatus::Evaluated
    }
}

/// Identifiers of every item the user liked or streamed
pub fn ground_truth(user: &User) -> HashSet<&str> {
    user.songs_liked
        .iter()
        .chain(user.songs_streamed.iter())
        .map(|track| track.id.as_str())
        .collect()
}

/// Evaluate `recommended` against the user's history.
///
/// Repeated identifiers in `recommended` are counted once. An empty list
/// against a non-empty ground truth scores 0 everywhere.
pub fn evaluate(user: &User, recommended: &[CatalogItem]) -> AccuracyMetrics {
    let truth = ground_truth(user);
    if truth.is_empty() {
        debug!(user_id = %user.user_id, "No ground truth for evaluation");
        return AccuracyMetrics::no_ground_truth();
    }

    let mut seen = HashSet::new();
    let predicted: Vec<&str> = recommended
        .iter()
        .map(|item| item.id.as_str())
        .filter(|id| seen.insert(*id))
        .collect();

    let matches = predicted.iter().filter(|id| truth.contains(*id)).count() as f64;

    let precision = if predicted.is_empty() {
        0.0
    } else {
        matches / predicted.len() as f64
    };
    let recall = matches / truth.len() as f64;
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };
    // Every prediction is positive, so a correct label is exactly a match.
    let accuracy = precision;

    debug!(
        user_id = %user.user_id,
        recommended = predicted.len(),
        ground_truth = truth.len(),
        matches,
        "Evaluated recommendations"
    );

    AccuracyMetrics {
        status: EvaluationStatus::Evaluated,
        precision: Some(precision),
        recall: Some(recall),
        f1: Some(f1),
        accuracy: Some(accuracy),
        message: None,
    }
}
