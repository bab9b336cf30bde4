//! HTTP handler for insight generation

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use shared::InsightOutput;

use crate::error::{AppError, AppResult};
use crate::services::InsightService;
use crate::AppState;

/// Generate a short reminder from arbitrary event data
/// POST /generateInsight
///
/// The body is passed to the model as-is; an empty body counts as `{}`.
pub async fn generate_insight(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<InsightOutput>> {
    let event = parse_event(&body)?;

    let service = InsightService::new(state.text_generation.clone());
    let insight = service.generate(&event).await?;
    Ok(Json(insight))
}

fn parse_event(body: &[u8]) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::validation("body", format!("Invalid JSON body: {}", e)))
}
