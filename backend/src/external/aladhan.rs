//! AlAdhan API client for fetching daily prayer timings
//!
//! `GET {base}/timings/{DD-MM-YYYY}?latitude=..&longitude=..&method=..`

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use shared::{RawTimings, TimingsQuery};

use super::{truncate_body, ProviderDay, TimingsProvider};
use crate::error::{AppError, AppResult, PRAYER_TIMES_FAILED};

/// AlAdhan API client
#[derive(Clone)]
pub struct AladhanClient {
    client: Client,
    base_url: String,
}

/// Outer envelope; `data` is an error string when `code` is not 200
#[derive(Debug, Deserialize)]
struct AladhanEnvelope {
    code: u16,
    #[serde(default)]
    status: Option<String>,
    data: Value,
}

#[derive(Debug, Deserialize)]
struct AladhanDay {
    timings: RawTimings,
    meta: AladhanMeta,
}

#[derive(Debug, Deserialize)]
struct AladhanMeta {
    timezone: String,
}

impl AladhanClient {
    /// Create a client against the configured base URL
    pub fn with_base_url(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn timings_url(&self, query: &TimingsQuery) -> String {
        format!("{}/timings/{}", self.base_url, query.provider_date())
    }
}

#[async_trait]
impl TimingsProvider for AladhanClient {
    async fn fetch_day(&self, query: &TimingsQuery) -> AppResult<ProviderDay> {
        let url = self.timings_url(query);
        tracing::debug!("Requesting timings from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", query.coordinates.latitude.to_string()),
                ("longitude", query.coordinates.longitude.to_string()),
                ("method", query.method.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::upstream(PRAYER_TIMES_FAILED, format!("AlAdhan request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::upstream(
                PRAYER_TIMES_FAILED,
                format!("Failed to read AlAdhan response: {}", e),
            )
        })?;

        parse_day(status, &body)
    }
}

/// Turn an AlAdhan HTTP response into a [`ProviderDay`]
fn parse_day(status: StatusCode, body: &str) -> AppResult<ProviderDay> {
    let envelope: AladhanEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(AppError::upstream(
                PRAYER_TIMES_FAILED,
                format!("AlAdhan API error: {} - {}", status, truncate_body(body)),
            ));
        }
        Err(e) => {
            return Err(AppError::upstream(
                PRAYER_TIMES_FAILED,
                format!("Failed to parse AlAdhan response: {}", e),
            ));
        }
    };

    if envelope.code != 200 {
        let reason = match &envelope.data {
            Value::String(s) => s.clone(),
            _ => envelope.status.clone().unwrap_or_default(),
        };
        return Err(AppError::upstream(
            PRAYER_TIMES_FAILED,
            format!(
                "AlAdhan API returned non-200 code {}: {}",
                envelope.code,
                truncate_body(&reason)
            ),
        ));
    }

    let day: AladhanDay = serde_json::from_value(envelope.data).map_err(|e| {
        AppError::upstream(
            PRAYER_TIMES_FAILED,
            format!("Unexpected AlAdhan timings payload: {}", e),
        )
    })?;

    Ok(ProviderDay {
        timings: day.timings,
        timezone: day.meta.timezone,
    })
}
