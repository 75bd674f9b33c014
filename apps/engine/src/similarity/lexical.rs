//! Lexical-overlap similarity — the guaranteed-available fallback path.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::similarity::{SimilarityError, SimilaritySource};

/// Jaccard similarity over lowercase whitespace-tokenized word sets, scaled
/// to `[0, 100]`. Pure and total: two empty texts score 0, never NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalSimilarity;

impl LexicalSimilarity {
    pub fn score(&self, text1: &str, text2: &str) -> f64 {
        let lower1 = text1.to_lowercase();
        let lower2 = text2.to_lowercase();
        let words1: HashSet<&str> = lower1.split_whitespace().collect();
        let words2: HashSet<&str> = lower2.split_whitespace().collect();

        let union = words1.union(&words2).count();
        if union == 0 {
            return 0.0;
        }

        let intersection = words1.intersection(&words2).count();
        intersection as f64 / union as f64 * 100.0
    }
}

#[async_trait]
impl SimilaritySource for LexicalSimilarity {
    async fn similarity(&self, text1: &str, text2: &str) -> Result<f64, SimilarityError> {
        Ok(self.score(text1, text2))
    }
}
