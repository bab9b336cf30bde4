//! Insight envelope and decoding of generated insight text

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_INSIGHT_TITLE: &str = "AI Insight";
pub const DEFAULT_INSIGHT_TYPE: &str = "insight";

/// Normalized insight shown to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsightEnvelope {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl InsightEnvelope {
    /// Wrap plain generated text in the default envelope
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_INSIGHT_TITLE.to_string(),
            message: text.into(),
            kind: DEFAULT_INSIGHT_TYPE.to_string(),
        }
    }
}

/// Result of decoding generated insight text.
///
/// Serialized untagged: a structured reply is passed through as the model
/// wrote it, keys in their original order, raw text goes out as an
/// [`InsightEnvelope`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum InsightOutput {
    Structured(Map<String, Value>),
    Raw(InsightEnvelope),
}

impl InsightOutput {
    /// Strip code fences, then try JSON. Only a JSON object counts as
    /// structured; a JSON string is unquoted, anything else is treated as text.
    pub fn decode(generated: &str) -> Self {
        let cleaned = strip_code_fences(generated);

        match serde_json::from_str::<Value>(&cleaned) {
            Ok(Value::Object(object)) => InsightOutput::Structured(object),
            Ok(Value::String(text)) => InsightOutput::Raw(InsightEnvelope::from_text(text)),
            _ => InsightOutput::Raw(InsightEnvelope::from_text(cleaned)),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, InsightOutput::Structured(_))
    }
}

/// Remove every ```` ```json ```` and ```` ``` ```` marker and trim
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}
