//! Text normalization shared by the scorers: the tokenizer and its stopword
//! filter. Both are total functions over arbitrary input: no I/O, no failure.

pub mod fuzzy;

use std::collections::HashSet;

/// Common English function words and pronouns dropped during tokenization.
const COMMON_ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "this", "that",
    "these", "those", "i", "you", "he", "she", "it", "we", "they",
];

/// Stopword set consulted by [`tokenize`]. Carried as explicit data rather
/// than module state so callers (and tests) can substitute alternate sets.
#[derive(Debug, Clone)]
pub struct Stopwords(HashSet<&'static str>);

impl Default for Stopwords {
    fn default() -> Self {
        Self(COMMON_ENGLISH.iter().copied().collect())
    }
}

impl Stopwords {
    pub fn new(words: &[&'static str]) -> Self {
        Self(words.iter().copied().collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}

/// Splits raw text into normalized significant terms.
///
/// Normalization: lowercase, treat any character outside `[a-z0-9-]` as a
/// separator, drop tokens of length <= 3, drop stopwords. The returned
/// iterator is lazy and finite; call again with the same input to restart.
pub fn tokenize<'a>(text: &'a str, stopwords: &'a Stopwords) -> impl Iterator<Item = String> + 'a {
    text.split(|c: char| !c.is_ascii_alphanumeric() && c != '-')
        .filter(|token| token.len() > 3)
        .map(str::to_ascii_lowercase)
        .filter(move |token| !stopwords.contains(token))
}
