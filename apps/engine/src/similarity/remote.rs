//! Remote sentence-similarity client — the single point of entry for the
//! hosted embedding service.
//!
//! One bounded attempt per invocation, no retries: the caller owns a local
//! fallback and prefers it over retry latency.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::similarity::SimilaritySource;

const INFERENCE_API_URL: &str = "https://api-inference.huggingface.co/models";

/// Sentence-similarity model served by the inference API.
pub const MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

#[derive(Debug, Error)]
pub enum SimilarityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("service returned no similarity score")]
    EmptyResponse,

    #[error("service returned a non-finite similarity score")]
    MalformedScore,

    #[error("similarity request timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Serialize)]
struct SimilarityRequest<'a> {
    inputs: SimilarityInputs<'a>,
}

#[derive(Debug, Serialize)]
struct SimilarityInputs<'a> {
    source_sentence: &'a str,
    sentences: Vec<&'a str>,
}

/// Calls the hosted sentence-similarity endpoint with `text1` as the source
/// sentence and `text2` as the single comparison candidate.
pub struct RemoteSimilarity {
    client: Client,
    api_key: String,
    timeout: Duration,
}

impl RemoteSimilarity {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            timeout,
        }
    }
}

#[async_trait]
impl SimilaritySource for RemoteSimilarity {
    async fn similarity(&self, text1: &str, text2: &str) -> Result<f64, SimilarityError> {
        let request_body = SimilarityRequest {
            inputs: SimilarityInputs {
                source_sentence: text1,
                sentences: vec![text2],
            },
        };

        let request = self
            .client
            .post(format!("{INFERENCE_API_URL}/{MODEL}"))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send();

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| SimilarityError::Timeout(self.timeout))??;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SimilarityError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // The service answers with one cosine-like score per candidate
        // sentence, each in [-1, 1].
        let body = response.text().await?;
        let scores: Vec<f64> = serde_json::from_str(&body)?;
        let raw = scores.first().copied().ok_or(SimilarityError::EmptyResponse)?;
        if !raw.is_finite() {
            return Err(SimilarityError::MalformedScore);
        }

        let score = rescale(raw);
        debug!(raw, score, "remote similarity scored");
        Ok(score)
    }
}

/// Rescales a cosine-like score in `[-1, 1]` to `[0, 100]`, clamping
/// anything the service sends outside its documented range.
fn rescale(raw: f64) -> f64 {
    ((raw + 1.0) / 2.0 * 100.0).clamp(0.0, 100.0)
}
