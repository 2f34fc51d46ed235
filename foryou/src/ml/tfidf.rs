//! Lexical vectorizer interface and the default TF-IDF implementation
//!
//! [`TfidfVectorizer`] follows the conventional TF-IDF defaults:
//! - lower-cased input
//! - tokens are runs of two or more word characters (`\b\w\w+\b`)
//! - raw term counts as term frequency
//! - smoothed inverse document frequency `ln((1 + n) / (1 + df)) + 1`
//! - every row scaled to unit L2 norm (empty rows stay zero)
//!
//! The vocabulary is fitted on exactly the batch passed to
//! [`LexicalVectorizer::fit_transform`] and sorted lexicographically, so
//! column order is deterministic. Rows are sparse: only the terms a text
//! actually contains are stored.

use std::collections::{BTreeMap, HashMap};

use lazy_static::lazy_static;
use regex::Regex;

use super::vector::{SparseRow, sparse_l2_normalize};

lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// A vectorizer that fits on a batch of texts and returns one row per text
pub trait LexicalVectorizer: Send + Sync {
    /// Fit a vocabulary on `texts` and return one sparse row per text,
    /// entries sorted by column
    fn fit_transform(&self, texts: &[String]) -> Vec<SparseRow>;
}

/// TF-IDF vectorizer with smoothed idf and L2-normalized rows
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer;

impl TfidfVectorizer {
    /// Create a new vectorizer
    pub fn new() -> Self {
        Self
    }

    /// Split a text into lower-cased tokens
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_REGEX
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Fit the sorted vocabulary for a batch, mapping term to column index
    pub fn vocabulary(texts: &[String]) -> BTreeMap<String, usize> {
        let mut terms: BTreeMap<String, usize> = texts
            .iter()
            .flat_map(|text| Self::tokenize(text))
            .map(|term| (term, 0))
            .collect();

        for (column, index) in terms.values_mut().enumerate() {
            *index = column;
        }
        terms
    }
}

impl LexicalVectorizer for TfidfVectorizer {
    fn fit_transform(&self, texts: &[String]) -> Vec<SparseRow> {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|t| Self::tokenize(t)).collect();
        let vocabulary = Self::vocabulary(texts);
        let n_docs = texts.len() as f64;

        let mut document_frequency = vec![0usize; vocabulary.len()];
        let mut counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(texts.len());

        for tokens in &tokenized {
            let mut doc_counts: HashMap<usize, usize> = HashMap::new();
            for token in tokens {
                if let Some(&column) = vocabulary.get(token) {
                    *doc_counts.entry(column).or_insert(0) += 1;
                }
            }
            for &column in doc_counts.keys() {
                document_frequency[column] += 1;
            }
            counts.push(doc_counts);
        }

        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        counts
            .into_iter()
            .map(|doc_counts| {
                let mut row: SparseRow = doc_counts
                    .into_iter()
                    .map(|(column, count)| (column, (count as f64 * idf[column]) as f32))
                    .collect();
                row.sort_unstable_by_key(|&(column, _)| column);
                sparse_l2_normalize(&mut row);
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::vector::sparse_cosine_similarity;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_drops_single_characters_and_lowercases() {
        assert_eq!(
            TfidfVectorizer::tokenize("A Pop b-Side, R&B!"),
            vec!["pop", "side"]
        );
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let vocab = TfidfVectorizer::vocabulary(&texts(&["rock queen", "adele pop"]));
        let terms: Vec<&str> = vocab.keys().map(String::as_str).collect();
        assert_eq!(terms, vec!["adele", "pop", "queen", "rock"]);
        assert_eq!(vocab["adele"], 0);
        assert_eq!(vocab["rock"], 3);
    }

    #[test]
    fn test_one_normalized_row_per_text() {
        let matrix = TfidfVectorizer::new().fit_transform(&texts(&[
            "pop adele english",
            "rock queen english",
            "",
        ]));

        assert_eq!(matrix.len(), 3);
        for row in &matrix[..2] {
            let norm: f32 = row.iter().map(|(_, x)| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5);
        }
        assert!(matrix[2].is_empty());
    }

    #[test]
    fn test_smoothed_idf_values() {
        let matrix =
            TfidfVectorizer::new().fit_transform(&texts(&["pop adele english", "rock queen english"]));

        // idf(df=1) = ln(3/2) + 1, idf(df=2) = 1, then row-normalized
        let rare = (1.5f64).ln() + 1.0;
        let norm = (2.0 * rare * rare + 1.0).sqrt();
        let expected_shared = (1.0 / norm) as f32;

        let similarity = sparse_cosine_similarity(&matrix[0], &matrix[1]);
        assert!((similarity - expected_shared * expected_shared).abs() < 1e-5);
    }

    #[test]
    fn test_identical_texts_have_similarity_one() {
        let matrix = TfidfVectorizer::new().fit_transform(&texts(&["jazz miles", "jazz miles"]));
        assert!((sparse_cosine_similarity(&matrix[0], &matrix[1]) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rows_hold_only_present_terms() {
        // every text adds a distinct artist, so the vocabulary grows with the batch
        let batch: Vec<String> = (0..500).map(|i| format!("pop artist{i} english")).collect();
        let matrix = TfidfVectorizer::new().fit_transform(&batch);

        assert_eq!(TfidfVectorizer::vocabulary(&batch).len(), 502);
        for row in &matrix {
            assert_eq!(row.len(), 3);
            assert!(row.windows(2).all(|pair| pair[0].0 < pair[1].0));
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(TfidfVectorizer::new().fit_transform(&[]).is_empty());
    }
}
