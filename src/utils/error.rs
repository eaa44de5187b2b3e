use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::core::fetch::FetchError;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Content request failed: {0}")]
    FetchError(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

impl SiteError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SiteError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        SiteError::StorageError {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::FetchError(FetchError::NotFound { .. }) => StatusCode::NOT_FOUND,
            SiteError::FetchError(FetchError::Cancelled) => StatusCode::SERVICE_UNAVAILABLE,
            SiteError::FetchError(_) => StatusCode::BAD_GATEWAY,
            SiteError::IoError(_)
            | SiteError::SerializationError(_)
            | SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::StorageError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SiteError::FetchError(_) => "CONTENT_UNAVAILABLE",
            SiteError::IoError(_) => "IO_ERROR",
            SiteError::SerializationError(_) => "SERIALIZATION_ERROR",
            SiteError::ConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "CONFIG_ERROR"
            }
            SiteError::ValidationError { .. } => "VALIDATION_ERROR",
            SiteError::NotFound(_) => "NOT_FOUND",
            SiteError::StorageError { .. } => "STORAGE_ERROR",
        }
    }

    /// Message suitable for a terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ConfigError { message } => format!("Configuration problem: {}", message),
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            SiteError::IoError(e) => format!("Could not access a file: {}", e),
            SiteError::StorageError { message } => format!("Contact storage failed: {}", message),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
