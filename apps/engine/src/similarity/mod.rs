//! Semantic similarity between two texts, with graceful degradation.
//!
//! Two [`SimilaritySource`] implementations exist: [`RemoteSimilarity`]
//! calls a hosted sentence-embedding service, and [`LexicalSimilarity`]
//! estimates overlap locally. [`SimilarityProvider`] composes them (remote
//! when an API credential is configured, lexical otherwise) and turns any
//! remote failure into a logged fallback instead of an error. Semantic
//! scoring degrades in accuracy, never in availability.

pub mod lexical;
pub mod remote;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::similarity::lexical::LexicalSimilarity;
use crate::similarity::remote::RemoteSimilarity;

pub use crate::similarity::remote::SimilarityError;

/// A source of semantic similarity scores in `[0, 100]`.
///
/// Swappable at engine construction so tests can substitute a stub without
/// touching the scoring pipeline.
#[async_trait]
pub trait SimilaritySource: Send + Sync {
    async fn similarity(&self, text1: &str, text2: &str) -> Result<f64, SimilarityError>;
}

/// The two-branch similarity strategy: an optional fallible primary source
/// and the infallible lexical fallback.
pub struct SimilarityProvider {
    primary: Option<Box<dyn SimilaritySource>>,
    fallback: LexicalSimilarity,
}

impl SimilarityProvider {
    /// Builds the provider from configuration: remote-backed when an API
    /// credential is present, lexical-only otherwise.
    pub fn from_config(config: &EngineConfig) -> Self {
        match &config.huggingface_api_key {
            Some(key) => Self::with_primary(Box::new(RemoteSimilarity::new(
                key.clone(),
                config.similarity_timeout,
            ))),
            None => {
                warn!("similarity API credential not set, using lexical fallback");
                Self::lexical_only()
            }
        }
    }

    pub fn with_primary(source: Box<dyn SimilaritySource>) -> Self {
        Self {
            primary: Some(source),
            fallback: LexicalSimilarity,
        }
    }

    pub fn lexical_only() -> Self {
        Self {
            primary: None,
            fallback: LexicalSimilarity,
        }
    }

    /// Scores similarity in `[0, 100]`. Never fails: a primary-path error is
    /// logged and the lexical estimate is returned in its place.
    pub async fn score(&self, text1: &str, text2: &str) -> f64 {
        if let Some(primary) = &self.primary {
            match primary.similarity(text1, text2).await {
                Ok(score) => {
                    debug!(score, "semantic similarity from primary source");
                    return score;
                }
                Err(e) => {
                    warn!("semantic similarity call failed, falling back to lexical overlap: {e}");
                }
            }
        }

        self.fallback.score(text1, text2)
    }
}
