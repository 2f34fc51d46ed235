//! Data models for users, catalog items and the request/response wire format.
//!
//! Every model here is a request-scoped snapshot: it is deserialized from the
//! caller's payload, read by the pipeline and dropped when the request
//! completes. Nothing is mutated in place.

pub mod catalog;
pub mod request;
pub mod user;

pub use catalog::CatalogItem;
pub use request::{RecommendationRequest, RecommendationResponse, UserRoster};
pub use user::{Preferences, TrackRef, User};

/// Token used in place of a missing genre
pub const UNKNOWN_GENRE: &str = "Unknown genre";

/// Token used in place of a missing language
pub const UNKNOWN_LANGUAGE: &str = "Unknown language";
