//! External API integrations
//!
//! Each outside service sits behind a trait so handlers can be exercised
//! against stub providers.

use async_trait::async_trait;
use reqwest::Client;
use shared::{Prompt, RawTimings, TimingsQuery};
use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::{AppError, AppResult};

pub mod aladhan;
pub mod gemini;

pub use aladhan::AladhanClient;
pub use gemini::GeminiClient;

/// One day of timings as reported by a timings provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDay {
    pub timings: RawTimings,
    /// IANA timezone of the queried location
    pub timezone: String,
}

#[async_trait]
pub trait TimingsProvider: Send + Sync {
    async fn fetch_day(&self, query: &TimingsQuery) -> AppResult<ProviderDay>;
}

#[async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Run a single completion and return the generated text
    async fn generate(&self, prompt: &Prompt) -> AppResult<String>;
}

/// Build the outbound HTTP client shared by the providers
pub fn http_client(config: &HttpConfig) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))
}

/// Keep provider bodies short in error details and logs
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
