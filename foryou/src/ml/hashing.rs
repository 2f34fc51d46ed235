//! Deterministic offline embedding service
//!
//! Feature-hashes lower-cased word tokens into a fixed number of buckets.
//! Output is stable across runs and machines. Used for tests and offline
//! runs.

use async_trait::async_trait;

use super::embedding::EmbeddingService;
use super::error::{MLError, Result};
use super::{EmbeddingBatch, EmbeddingVector};

/// Default number of hash buckets
pub const DEFAULT_HASHING_DIMENSIONS: usize = 256;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Embedding service that hashes tokens into a fixed-size vector
#[derive(Debug, Clone)]
pub struct HashingEmbeddingService {
    dimensions: usize,
}

impl HashingEmbeddingService {
    /// Create a hashing embedder with the given output dimension
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Output dimension
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Embed one text
    pub fn embed_one(&self, text: &str) -> EmbeddingVector {
        if self.dimensions == 0 {
            return Vec::new();
        }

        let mut vector = vec![0.0; self.dimensions];
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let hash = fnv1a(&token.to_lowercase());
            let bucket = (hash % self.dimensions as u64) as usize;
            // high bit picks the sign
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }
        vector
    }
}

impl Default for HashingEmbeddingService {
    fn default() -> Self {
        Self::new(DEFAULT_HASHING_DIMENSIONS)
    }
}

#[async_trait]
impl EmbeddingService for HashingEmbeddingService {
    async fn embed(&self, texts: &[String]) -> Result<EmbeddingBatch> {
        if self.dimensions == 0 {
            return Err(MLError::configuration(
                "Hashing embedder dimension must be greater than 0",
            ));
        }
        Ok(texts.iter().map(|text| self.embed_one(text)).collect())
    }
}

fn fnv1a(token: &str) -> u64 {
    token.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}
