//! Request validation and end-to-end orchestration

pub mod recommender;

pub use recommender::{Recommender, RecommenderBuilder, resolve_user};
