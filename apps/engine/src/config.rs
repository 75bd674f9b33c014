use std::time::Duration;

use anyhow::{Context, Result};

/// Bound on the remote similarity call. One attempt, no retries: the local
/// fallback is preferred over retry latency.
pub const DEFAULT_SIMILARITY_TIMEOUT: Duration = Duration::from_secs(30);

/// Engine configuration loaded from environment variables.
///
/// The similarity API credential is optional: without it the engine scores
/// semantic similarity through the local lexical fallback. Absence is a
/// supported state, not an error.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub huggingface_api_key: Option<String>,
    pub similarity_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            huggingface_api_key: None,
            similarity_timeout: DEFAULT_SIMILARITY_TIMEOUT,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let huggingface_api_key = std::env::var("HUGGINGFACE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let similarity_timeout = match std::env::var("SIMILARITY_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .context("SIMILARITY_TIMEOUT_SECS must be a number of seconds")?,
            ),
            Err(_) => DEFAULT_SIMILARITY_TIMEOUT,
        };

        Ok(EngineConfig {
            huggingface_api_key,
            similarity_timeout,
        })
    }
}
