//! WebAssembly module for the Noor gateway
//!
//! Provides client-side computation for:
//! - Next-prayer selection from cached timings (offline)
//! - Prayer time normalization
//! - Insight decoding

use chrono::{DateTime, Utc};
use shared::{DailyTimings, InsightOutput, RawTimings};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Compute the schedule and next prayer from cached provider timings.
///
/// `timings_json` uses the provider's keys (`{"Fajr": "05:00 (+03)", ...}`);
/// `now_ms` is milliseconds since the Unix epoch, as from `Date.now()`.
#[wasm_bindgen]
pub fn compute_next_prayer(timings_json: &str, timezone: &str, now_ms: f64) -> Result<String, JsValue> {
    schedule_json(timings_json, timezone, now_ms).map_err(|e| JsValue::from_str(&e))
}

/// Same as [`compute_next_prayer`] using the browser's current time
#[wasm_bindgen]
pub fn compute_next_prayer_now(timings_json: &str, timezone: &str) -> Result<String, JsValue> {
    compute_next_prayer(timings_json, timezone, js_sys::Date::now())
}

/// Normalize a provider time such as `"05:12 (+03)"` to `HH:MM`
#[wasm_bindgen]
pub fn normalize_prayer_time(raw: &str) -> Result<String, JsValue> {
    shared::normalize_time("time", raw)
        .map(shared::format_time)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode generated insight text into envelope JSON
#[wasm_bindgen]
pub fn decode_insight(text: &str) -> String {
    insight_json(text)
}

fn schedule_json(timings_json: &str, timezone: &str, now_ms: f64) -> Result<String, String> {
    let raw: RawTimings =
        serde_json::from_str(timings_json).map_err(|e| format!("Invalid timings JSON: {}", e))?;
    let timings = DailyTimings::from_raw(&raw, timezone).map_err(|e| e.to_string())?;

    let now = DateTime::<Utc>::from_timestamp_millis(now_ms as i64)
        .ok_or_else(|| format!("Invalid timestamp: {}", now_ms))?;

    serde_json::to_string(&timings.schedule(now)).map_err(|e| e.to_string())
}

fn insight_json(text: &str) -> String {
    let output = InsightOutput::decode(text);
    serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
}
