//! Combination of the semantic and lexical similarity signals.

/// Average two index-aligned similarity vectors element by element.
///
/// Both signals carry equal weight. Inputs are expected to have the same
/// length; any surplus in the longer one is ignored.
pub fn fuse_scores(semantic: &[f32], lexical: &[f32]) -> Vec<f32> {
    semantic
        .iter()
        .zip(lexical.iter())
        .map(|(s, l)| (s + l) / 2.0)
        .collect()
}
