//! Retrieval-quality evaluation of a recommendation list
//!
//! The ground truth is everything the user already liked or streamed. Every
//! recommended item counts as a positive prediction, so the metrics measure
//! how much of the list overlaps the user's history.

pub mod metrics;

pub use metrics::{AccuracyMetrics, EvaluationStatus, NO_GROUND_TRUTH_MESSAGE, evaluate, ground_truth};
