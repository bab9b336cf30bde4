//! Error handling for the Noor gateway
//!
//! Every failure is reported to the caller as a flat JSON body,
//! `{ "error": ..., "details": ... }`, with an HTTP error status.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `error` field of every timings-provider failure
pub const PRAYER_TIMES_FAILED: &str = "Failed to fetch prayer times.";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed caller input; no provider was called
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    /// Timings provider answered with a failure, or could not be reached
    #[error("{error}: {details}")]
    Upstream { error: String, details: String },

    /// Text-generation provider failure
    #[error("Text generation error: {0}")]
    TextGeneration(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn upstream(error: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::Upstream {
            error: error.into(),
            details: details.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation("body", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::validation("query", rejection.body_text())
    }
}

/// Error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation { message, .. } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: message.clone(),
                    details: None,
                },
            ),
            AppError::Upstream { error, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: error.clone(),
                    details: Some(details.clone()),
                },
            ),
            AppError::TextGeneration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg.clone(),
                    details: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: format!("Configuration error: {}", msg),
                    details: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg.clone(),
                    details: None,
                },
            ),
        };

        // Caller mistakes are routine; everything else is worth an error line
        if status.is_client_error() {
            tracing::warn!("Rejected request: {}", self);
        } else {
            tracing::error!("Error: {:?}", self);
        }

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
