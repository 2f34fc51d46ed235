//! Vector math for both similarity signals: dense rows for embeddings,
//! sparse rows for the lexical signal.

/// Sparse row of `(column, value)` entries sorted by column
pub type SparseRow = Vec<(usize, f32)>;

/// Euclidean norm
pub fn l2_norm(vector: &[f32]) -> f32 {
    vector.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale a vector to unit length in place.
///
/// A zero vector is left unchanged rather than divided by zero.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm = l2_norm(vector);
    if norm == 0.0 {
        return;
    }
    for value in vector.iter_mut() {
        *value /= norm;
    }
}

/// Dot product over the common prefix of two vectors
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine similarity, 0.0 when either side has zero norm
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let a_norm = l2_norm(a);
    let b_norm = l2_norm(b);

    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }

    dot(a, b) / (a_norm * b_norm)
}

/// Cosine similarity of one query row against every row of a matrix
pub fn cosine_similarities(query: &[f32], rows: &[Vec<f32>]) -> Vec<f32> {
    rows.iter().map(|row| cosine_similarity(query, row)).collect()
}

/// Scale a sparse row to unit length in place; an empty or zero row is left unchanged
pub fn sparse_l2_normalize(row: &mut [(usize, f32)]) {
    let norm = row.iter().map(|(_, x)| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for (_, value) in row.iter_mut() {
        *value /= norm;
    }
}

/// Dot product of two column-sorted sparse rows
pub fn sparse_dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Cosine similarity of two sparse rows, 0.0 when either side has zero norm
pub fn sparse_cosine_similarity(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let a_norm = sparse_dot(a, a).sqrt();
    let b_norm = sparse_dot(b, b).sqrt();

    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }

    sparse_dot(a, b) / (a_norm * b_norm)
}

/// Sparse cosine similarity of one query row against every row
pub fn sparse_cosine_similarities(query: &[(usize, f32)], rows: &[SparseRow]) -> Vec<f32> {
    rows.iter()
        .map(|row| sparse_cosine_similarity(query, row))
        .collect()
}
