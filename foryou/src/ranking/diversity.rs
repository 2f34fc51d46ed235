//! Diversity re-ranking of a ranked shortlist
//!
//! Two capping stages run in sequence:
//!
//! - Stage A keeps at most `max_per_artist` items per artist name
//! - Stage B keeps at most `max_per_genre` items per genre, with missing
//!   genres grouped under the [`UNKNOWN_GENRE`] placeholder
//!
//! Each stage is a [`cap_and_backfill`] pass: items are walked in rank order
//! and an item is kept while its group is under the cap. If fewer than the
//! target survive, the stage refills from its own input in rank order,
//! skipping items already kept. Backfill may re-admit items the cap
//! rejected; the target size wins over the cap. Stage B only ever sees what
//! Stage A returned, so an item dropped by Stage A cannot come back.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::config::RankingConfig;
use crate::models::{CatalogItem, UNKNOWN_GENRE};

/// Group caps and target size for [`DiversityReranker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiversityConstraint {
    /// Maximum items per artist in Stage A
    pub max_per_artist: usize,
    /// Maximum items per genre in Stage B
    pub max_per_genre: usize,
    /// Length each stage tries to reach
    pub target_size: usize,
}

impl Default for DiversityConstraint {
    fn default() -> Self {
        Self {
            max_per_artist: 2,
            max_per_genre: 2,
            target_size: 14,
        }
    }
}

impl From<&RankingConfig> for DiversityConstraint {
    fn from(config: &RankingConfig) -> Self {
        Self {
            max_per_artist: config.max_per_artist,
            max_per_genre: config.max_per_genre,
            target_size: config.target_size,
        }
    }
}

/// Keep at most `cap` items per key, then backfill to `target`.
///
/// The result preserves the relative order of `ranked` for the capped pass,
/// followed by backfilled items in their original order. It never holds two
/// equal items and never exceeds `target`. When `ranked` is no longer than
/// `target` every distinct item is returned.
pub fn cap_and_backfill<T, K, F>(ranked: &[T], cap: usize, target: usize, key: F) -> Vec<T>
where
    T: Clone + PartialEq,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    let mut kept: Vec<T> = Vec::with_capacity(target.min(ranked.len()));

    for item in ranked {
        if kept.contains(item) {
            continue;
        }
        let count = counts.entry(key(item)).or_insert(0);
        if *count < cap {
            *count += 1;
            kept.push(item.clone());
        }
    }
    kept.truncate(target);

    if kept.len() < target {
        for item in ranked {
            if kept.len() >= target {
                break;
            }
            if !kept.contains(item) {
                kept.push(item.clone());
            }
        }
    }

    kept
}

/// Applies the artist and genre caps to a ranked shortlist
#[derive(Debug, Clone, Copy, Default)]
pub struct DiversityReranker {
    constraint: DiversityConstraint,
}

impl DiversityReranker {
    pub fn new(constraint: DiversityConstraint) -> Self {
        Self { constraint }
    }

    pub fn constraint(&self) -> &DiversityConstraint {
        &self.constraint
    }

    /// Run Stage A then Stage B
    pub fn rerank(&self, ranked: &[CatalogItem]) -> Vec<CatalogItem> {
        let by_artist = self.artist_stage(ranked);
        let by_genre = self.genre_stage(&by_artist);
        debug!(
            input = ranked.len(),
            after_artist = by_artist.len(),
            output = by_genre.len(),
            "Diversity re-ranking complete"
        );
        by_genre
    }

    /// Stage A: cap items per artist
    pub fn artist_stage(&self, ranked: &[CatalogItem]) -> Vec<CatalogItem> {
        cap_and_backfill(
            ranked,
            self.constraint.max_per_artist,
            self.constraint.target_size,
            |item| item.artist_name.clone(),
        )
    }

    /// Stage B: cap items per genre
    pub fn genre_stage(&self, ranked: &[CatalogItem]) -> Vec<CatalogItem> {
        cap_and_backfill(
            ranked,
            self.constraint.max_per_genre,
            self.constraint.target_size,
            |item| item.genre.clone().unwrap_or_else(|| UNKNOWN_GENRE.to_string()),
        )
    }
}
