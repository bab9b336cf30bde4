//! Chat service: one message in, one persona-constrained reply out

use shared::{chat_prompt, validate_chat_message, ChatReply, ChatRequest};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::TextGenerationProvider;

/// Stateless chat responder; nothing is remembered between calls
#[derive(Clone)]
pub struct ChatService {
    provider: Arc<dyn TextGenerationProvider>,
}

impl ChatService {
    pub fn new(provider: Arc<dyn TextGenerationProvider>) -> Self {
        Self { provider }
    }

    pub async fn reply(&self, request: &ChatRequest) -> AppResult<ChatReply> {
        let message = validate_chat_message(request.message.as_deref())
            .map_err(|m| AppError::validation("message", m))?;

        let reply = self.provider.generate(&chat_prompt(message)).await?;

        Ok(ChatReply { reply })
    }
}
