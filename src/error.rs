//! Feed error types with HTTP status code mapping.
//!
//! [`FeedError`] is the central error type for the crate. The gateway maps
//! each variant to an HTTP status code and structured JSON error response;
//! the listener side surfaces it from connect and render failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid namespace: test"
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Error enum shared by the gateway and the listener.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 3000–3999 | Server     | 500 Internal Server Error |
/// | 5000–5999 | Transport  | 502 Bad Gateway           |
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Namespace path failed validation.
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    /// Endpoint host or port failed validation.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// WebSocket transport failure (connect, read, or close).
    #[error("transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    /// Writing the display region failed.
    #[error("render error: {0}")]
    Render(#[from] std::io::Error),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FeedError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidNamespace(_) => 1002,
            Self::InvalidEndpoint(_) => 1003,
            Self::Internal(_) => 3000,
            Self::Render(_) => 3001,
            Self::Transport(_) => 5001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidNamespace(_) | Self::InvalidEndpoint(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Render(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for FeedError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
