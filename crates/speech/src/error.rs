use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpeechError>;

/// Speech gateway errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Invalid request parameters (missing or empty text)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Provider API returned a non-success status
    ///
    /// Always surfaced as 502 with the provider's diagnostic text attached,
    /// so upstream failures are never silently swallowed
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error reaching the provider
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Configuration error (e.g. no API key available)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error
    /// If Some(message), it is safe to show to the caller
    /// If None, details must not leak
    #[error("Internal server error")]
    InternalError(Option<String>),
}

impl SpeechError {
    /// Get the appropriate HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ProviderApiError { .. } => StatusCode::BAD_GATEWAY,
            Self::ConnectionError(_) | Self::ConfigError(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message that is safe to expose to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest(message) | Self::ConfigError(message) => message.clone(),
            Self::ProviderApiError { .. } => "TTS provider error".to_string(),
            Self::ConnectionError(_) => "failed to reach TTS provider".to_string(),
            Self::InternalError(Some(message)) => message.clone(),
            Self::InternalError(None) => "internal server error".to_string(),
        }
    }

    /// Provider diagnostic text attached to the response, when present
    fn details(&self) -> Option<String> {
        match self {
            Self::ProviderApiError { message, .. } => Some(message.clone()),
            _ => None,
        }
    }
}

/// JSON error envelope returned to API consumers
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for SpeechError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error_response = ErrorResponse {
            error: self.client_message(),
            details: self.details(),
        };

        (status, Json(error_response)).into_response()
    }
}
