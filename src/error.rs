//! Error types for the storefront service
//!
//! Provides unified error handling using thiserror. Every error is
//! caught at the HTTP boundary and rendered as the JSON error shape
//! `{"success": false, "error": "…"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the storefront service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The external data-store call failed
    #[error("External store error: {0}")]
    ExternalStore(String),

    /// Request body is missing or malformed
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Presented credential was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ExternalStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the storefront service.
pub type Result<T> = std::result::Result<T, ApiError>;
