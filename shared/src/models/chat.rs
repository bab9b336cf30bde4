//! Chat request/reply models

use serde::{Deserialize, Serialize};

/// Body of `POST /aiChat`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Reply to a single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}
