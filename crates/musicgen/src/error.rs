use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::types::GenerationEnvelope;

pub type Result<T> = std::result::Result<T, MusicGenError>;

/// Music generation errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum MusicGenError {
    /// Invalid request parameters (e.g. empty lyrics)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Gateway misconfiguration (e.g. missing provider credential)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Provider API returned a non-success response
    ///
    /// The upstream status is passed through to the caller.
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Internal server error
    /// If Some(message), it is safe to show to the caller
    /// If None, details should not leak
    #[error("Internal server error")]
    InternalError(Option<String>),
}

impl MusicGenError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ProviderApiError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::ConfigError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to expose to API consumers
    pub fn client_message(&self) -> String {
        match self {
            Self::InternalError(Some(message)) => message.clone(),
            Self::InternalError(None) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for MusicGenError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope = GenerationEnvelope::failure(self.client_message());

        (status, Json(envelope)).into_response()
    }
}
