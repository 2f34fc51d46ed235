//! Validation and normalization of embedding batches returned by a service
//!
//! # Examples
//!
//! ```rust
//! use foryou::ml::EmbeddingManager;
//!
//! let manager = EmbeddingManager::new();
//! let mut batch = vec![vec![3.0, 4.0], vec![0.0, 0.0]];
//! manager.validate_batch(&batch, 2).unwrap();
//! manager.normalize_batch(&mut batch);
//! assert!((batch[0][0] - 0.6).abs() < 1e-6);
//! ```

use super::error::{MLError, Result};
use super::vector::l2_normalize;

/// Checks embedding batches before they reach the scorer
#[derive(Debug, Clone, Default)]
pub struct EmbeddingManager {
    /// Expected embedding dimensions (optional validation)
    expected_dimensions: Option<usize>,
}

impl EmbeddingManager {
    /// Create a new embedding manager
    pub fn new() -> Self {
        Self {
            expected_dimensions: None,
        }
    }

    /// Create an embedding manager with expected dimensions for validation
    pub fn with_expected_dimensions(expected_dimensions: usize) -> Self {
        Self {
            expected_dimensions: Some(expected_dimensions),
        }
    }

    /// Get expected dimensions (if set)
    pub fn expected_dimensions(&self) -> Option<usize> {
        self.expected_dimensions
    }

    /// Validate a single embedding vector
    ///
    /// Checks for:
    /// - Non-empty vectors
    /// - Expected dimensions (if configured)
    /// - Finite values (no NaN/infinity)
    pub fn validate_embedding(&self, embedding: &[f32]) -> Result<()> {
        if embedding.is_empty() {
            return Err(MLError::embedding("Embedding cannot be empty"));
        }

        if let Some(expected_dim) = self.expected_dimensions
            && embedding.len() != expected_dim
        {
            return Err(MLError::embedding(format!(
                "Expected embedding dimension {}, got {}",
                expected_dim,
                embedding.len()
            )));
        }

        if let Some((i, value)) = embedding.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(MLError::embedding(format!(
                "Invalid value at index {}: {}",
                i, value
            )));
        }

        Ok(())
    }

    /// Validate a whole batch against the number of texts that were sent
    ///
    /// Every vector must pass [`validate_embedding`](Self::validate_embedding)
    /// and all vectors must share one dimension.
    pub fn validate_batch(&self, batch: &[Vec<f32>], expected_count: usize) -> Result<()> {
        if batch.len() != expected_count {
            return Err(MLError::CountMismatch {
                expected: expected_count,
                actual: batch.len(),
            });
        }

        let Some(first) = batch.first() else {
            return Ok(());
        };

        for (i, embedding) in batch.iter().enumerate() {
            self.validate_embedding(embedding)
                .map_err(|e| MLError::embedding(format!("Vector {}: {}", i, e)))?;

            if embedding.len() != first.len() {
                return Err(MLError::embedding(format!(
                    "Inconsistent dimensions in batch: vector 0 has {}, vector {} has {}",
                    first.len(),
                    i,
                    embedding.len()
                )));
            }
        }

        Ok(())
    }

    /// L2-normalize every vector of a batch; zero vectors stay zero
    pub fn normalize_batch(&self, batch: &mut [Vec<f32>]) {
        for embedding in batch.iter_mut() {
            l2_normalize(embedding);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_validation() {
        let manager = EmbeddingManager::new();

        assert!(manager.validate_embedding(&[1.0, 2.0, 3.0]).is_ok());
        assert!(manager.validate_embedding(&[]).is_err());
        assert!(manager.validate_embedding(&[1.0, f32::NAN, 3.0]).is_err());
        assert!(manager.validate_embedding(&[f32::INFINITY]).is_err());
    }

    #[test]
    fn test_dimension_validation() {
        let manager = EmbeddingManager::with_expected_dimensions(3);

        assert!(manager.validate_embedding(&[1.0, 2.0, 3.0]).is_ok());
        assert!(manager.validate_embedding(&[1.0, 2.0]).is_err());
        assert_eq!(manager.expected_dimensions(), Some(3));
    }

    #[test]
    fn test_batch_count_mismatch() {
        let manager = EmbeddingManager::new();
        let batch = vec![vec![1.0, 0.0]];

        let err = manager.validate_batch(&batch, 2).unwrap_err();
        assert!(matches!(
            err,
            MLError::CountMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_batch_inconsistent_dimensions() {
        let manager = EmbeddingManager::new();
        let batch = vec![vec![1.0, 0.0], vec![1.0, 0.0, 0.0]];
        assert!(matches!(
            manager.validate_batch(&batch, 2),
            Err(MLError::Embedding(_))
        ));
    }

    #[test]
    fn test_empty_batch_for_zero_texts() {
        let manager = EmbeddingManager::new();
        assert!(manager.validate_batch(&[], 0).is_ok());
    }

    #[test]
    fn test_normalize_batch_keeps_zero_vectors() {
        let manager = EmbeddingManager::new();
        let mut batch = vec![vec![3.0, 4.0], vec![0.0, 0.0]];
        manager.normalize_batch(&mut batch);

        let norm: f32 = batch[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert_eq!(batch[1], vec![0.0, 0.0]);
    }
}
