//! HTTP-facing error type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::codec::CodecError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to clients, standalone or inside batch results.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.parts().0
    }

    /// Converts the error into the payload used for batch items.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.parts();
        let (message, details) = match self {
            AppError::Validation { message, details } | AppError::Internal { message, details } => {
                (message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

/// Every codec failure is the client's input; all map to `400 Bad Request`.
impl From<CodecError> for AppError {
    fn from(err: CodecError) -> Self {
        let message = match &err {
            CodecError::InvalidFormat(_) | CodecError::InvalidCharacter { .. } => {
                "Invalid URL or code format".to_string()
            }
            CodecError::DomainRecoveryFailed => {
                "Could not separate domain from path in code".to_string()
            }
            CodecError::DecodeFailed { component, .. } => format!("Failed to decode {component}"),
            CodecError::CorruptData(_) => "Corrupt compressed data".to_string(),
            CodecError::CompressionFailed(_) => {
                return AppError::internal("Compression failed", json!({ "kind": err.kind() }));
            }
            CodecError::AmbiguousMapping { .. }
            | CodecError::SchemeMismatch { .. }
            | CodecError::UnknownScheme(_) => {
                return AppError::internal(
                    "Codec misconfigured",
                    json!({ "kind": err.kind(), "reason": err.to_string() }),
                );
            }
        };

        let details = match err.component() {
            Some(component) => json!({
                "kind": err.kind(),
                "component": component.as_str(),
                "reason": err.to_string(),
            }),
            None => json!({ "kind": err.kind(), "reason": err.to_string() }),
        };

        AppError::bad_request(message, details)
    }
}
