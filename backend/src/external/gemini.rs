//! Gemini text-generation client
//!
//! Uses the Generative Language REST API (`models/{model}:generateContent`)
//! with the persona as `systemInstruction` and a single user turn.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::Prompt;

use super::{truncate_body, TextGenerationProvider};
use crate::config::GeminiConfig;
use crate::error::{AppError, AppResult};

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: RequestContent<'a>,
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GeminiClient {
    pub fn new(client: Client, config: &GeminiConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

fn build_request(prompt: &Prompt) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        system_instruction: RequestContent {
            role: None,
            parts: vec![RequestPart {
                text: prompt.system,
            }],
        },
        contents: vec![RequestContent {
            role: Some("user"),
            parts: vec![RequestPart { text: &prompt.user }],
        }],
    }
}

/// Concatenated text of the first candidate
fn reply_text(response: GenerateContentResponse) -> AppResult<String> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AppError::TextGeneration(format!(
            "Prompt was blocked by Gemini: {}",
            reason
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::TextGeneration("Gemini returned no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AppError::TextGeneration(format!(
            "Gemini returned an empty reply (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }

    Ok(text)
}

#[async_trait]
impl TextGenerationProvider for GeminiClient {
    async fn generate(&self, prompt: &Prompt) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Gemini API key is not set (NOOR__GEMINI__API_KEY or GEMINI_API_KEY)".to_string(),
            )
        })?;

        tracing::debug!(
            "Requesting completion from {} ({} chars of user input)",
            self.model,
            prompt.user.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&build_request(prompt))
            .send()
            .await
            .map_err(|e| AppError::TextGeneration(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::TextGeneration(format!("Failed to read Gemini response: {}", e))
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| format!("Gemini API error: {} - {}", status, truncate_body(&body)));
            return Err(AppError::TextGeneration(message));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::TextGeneration(format!("Failed to parse Gemini response: {}", e))
        })?;

        reply_text(parsed)
    }
}
