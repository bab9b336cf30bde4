//! Fixed assistant personas and the prompts assembled from them

use serde::Serialize;
use serde_json::Value;

/// Persona for short reminders generated from app events
pub const INSIGHT_PERSONA: &str = "\
You are Horeen, the MuslimLife AI assistant.
Provide gentle, uplifting reminders. No fatwas. Maximum 2 sentences.";

/// Persona and safety rules for free-form chat
pub const CHAT_PERSONA: &str = "\
You are Noor — نور, the MuslimLife AI assistant.
Provide gentle, faith-inspired guidance.
Do not give fatwas, formal religious rulings or strict verdicts; suggest consulting a qualified scholar instead.
Keep answers short (max 2–3 sentences).
Never reinterpret slang, jokes or ambiguous everyday words as religious terms.
If a term is ambiguous, ask the user what they mean before answering.";

/// A single-turn completion request: system instruction plus one user turn
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
}

/// Insight prompt: the event payload is embedded in full, pretty-printed
pub fn insight_prompt(event: &Value) -> Prompt {
    let event_data = serde_json::to_string_pretty(event).unwrap_or_else(|_| event.to_string());

    Prompt {
        system: INSIGHT_PERSONA,
        user: format!("Event Data:\n{event_data}"),
    }
}

pub fn chat_prompt(message: &str) -> Prompt {
    Prompt {
        system: CHAT_PERSONA,
        user: message.to_string(),
    }
}
