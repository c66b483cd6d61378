//! Error handling for the Weather Gateway
//!
//! Every error renders as a JSON object with an `error` message and a `code`;
//! upstream failures also carry the provider's payload under `details`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required credential is not configured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The weather provider answered with a non-success status
    #[error("{message} (provider status {status})")]
    Upstream {
        message: String,
        status: u16,
        details: serde_json::Value,
    },

    /// The text generation provider failed
    #[error("Text generation error: {0}")]
    TextGeneration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Replace the caller-facing message of an upstream failure
    pub fn with_upstream_message(self, message: &str) -> Self {
        match self {
            AppError::Upstream {
                status, details, ..
            } => AppError::Upstream {
                message: message.to_string(),
                status,
                details,
            },
            other => other,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let (status, body) = match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    code: "VALIDATION_ERROR".to_string(),
                    details: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg,
                    code: "CONFIGURATION_ERROR".to_string(),
                    details: None,
                },
            ),
            AppError::Upstream {
                message,
                status,
                details,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorResponse {
                    error: message,
                    code: "UPSTREAM_ERROR".to_string(),
                    details: Some(details),
                },
            ),
            AppError::TextGeneration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg,
                    code: "TEXT_GENERATION_ERROR".to_string(),
                    details: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: msg,
                    code: "INTERNAL_ERROR".to_string(),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
