//! Stub providers and request helpers shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use noor_backend::{
    clock::FixedClock,
    config::{Config, GeminiConfig, HttpConfig, ServerConfig, TimingsConfig},
    create_app,
    error::{AppError, AppResult, PRAYER_TIMES_FAILED},
    external::{ProviderDay, TextGenerationProvider, TimingsProvider},
    AppState,
};
use serde_json::Value;
use shared::{Prompt, RawTimings, TimingsQuery};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tower::ServiceExt;

// ============================================================================
// Stub Providers
// ============================================================================

pub struct StubTimings {
    calls: AtomicUsize,
    outcome: Result<ProviderDay, String>,
    last_query: Mutex<Option<TimingsQuery>>,
}

impl StubTimings {
    pub fn returning(day: ProviderDay) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(day),
            last_query: Mutex::new(None),
        })
    }

    pub fn failing(details: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Err(details.to_string()),
            last_query: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<TimingsQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl TimingsProvider for StubTimings {
    async fn fetch_day(&self, query: &TimingsQuery) -> AppResult<ProviderDay> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.outcome
            .clone()
            .map_err(|details| AppError::upstream(PRAYER_TIMES_FAILED, details))
    }
}

pub struct StubText {
    calls: AtomicUsize,
    outcome: Result<String, String>,
    last_prompt: Mutex<Option<Prompt>>,
}

impl StubText {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(text.to_string()),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Err(message.to_string()),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerationProvider for StubText {
    async fn generate(&self, prompt: &Prompt) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.clone());
        self.outcome.clone().map_err(AppError::TextGeneration)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// The Mecca scenario day: Fajr 05:00 .. Isha 19:20 in Asia/Riyadh
pub fn mecca_day() -> ProviderDay {
    ProviderDay {
        timings: RawTimings {
            fajr: "05:00 (+03)".into(),
            sunrise: "06:20 (+03)".into(),
            dhuhr: "12:20 (+03)".into(),
            asr: "15:30 (+03)".into(),
            maghrib: "18:00 (+03)".into(),
            isha: "19:20 (+03)".into(),
        },
        timezone: "Asia/Riyadh".into(),
    }
}

/// A UTC instant for a Riyadh wall-clock time on 2024-01-01 (UTC+3)
pub fn riyadh(hour: u32, minute: u32) -> DateTime<Utc> {
    chrono_tz::Asia::Riyadh
        .with_ymd_and_hms(2024, 1, 1, hour, minute, 0)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn test_config() -> Config {
    Config {
        environment: "test".into(),
        server: ServerConfig::default(),
        http: HttpConfig { timeout_secs: 5 },
        timings: TimingsConfig {
            base_url: "http://127.0.0.1:9/v1".into(),
            default_method: 2,
        },
        gemini: GeminiConfig {
            api_key: Some("test-key".into()),
            model: "gemini-test".into(),
            base_url: "http://127.0.0.1:9/v1beta".into(),
        },
    }
}

pub fn app_with(
    timings: Arc<dyn TimingsProvider>,
    text: Arc<dyn TextGenerationProvider>,
    now: DateTime<Utc>,
) -> Router {
    let state = AppState::new(test_config(), timings, text, Arc::new(FixedClock(now))).unwrap();
    create_app(state)
}

// ============================================================================
// Request Helpers
// ============================================================================

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
