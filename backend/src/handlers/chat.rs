//! HTTP handler for the chat assistant

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use shared::{ChatReply, ChatRequest};

use crate::error::AppResult;
use crate::services::ChatService;
use crate::AppState;

/// Answer a single chat message
/// POST /aiChat
pub async fn ai_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let Json(request) = payload?;

    let service = ChatService::new(state.text_generation.clone());
    let reply = service.reply(&request).await?;
    Ok(Json(reply))
}
