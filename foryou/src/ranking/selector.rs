//! Top-K selection over combined scores.

use crate::models::CatalogItem;

/// Picks the `k` best-scoring catalog positions
#[derive(Debug, Clone, Copy)]
pub struct TopKSelector {
    k: usize,
}

impl TopKSelector {
    /// Create a selector keeping at most `k` items
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Shortlist size
    pub fn k(&self) -> usize {
        self.k
    }

    /// Indices of the best `k` scores, highest first.
    ///
    /// The sort is stable, so equal scores keep catalog order. `-0.0` and
    /// `0.0` count as equal. A catalog smaller than `k` yields a shorter
    /// list; nothing is padded.
    pub fn select(&self, scores: &[f32]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..scores.len()).collect();
        indices.sort_by(|&a, &b| sort_key(scores[b]).total_cmp(&sort_key(scores[a])));
        indices.truncate(self.k);
        indices
    }

    /// The best `k` catalog items, highest score first
    pub fn ranked_items(&self, catalog: &[CatalogItem], scores: &[f32]) -> Vec<CatalogItem> {
        self.select(scores)
            .into_iter()
            .filter_map(|i| catalog.get(i).cloned())
            .collect()
    }
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self::new(14)
    }
}

fn sort_key(score: f32) -> f32 {
    if score == 0.0 { 0.0 } else { score }
}
