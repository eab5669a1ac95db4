//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Basket                                 │
//! │                                                                         │
//! │  CartService → ServiceError                                             │
//! │                    │                                                    │
//! │                    ├── Core(InvalidArgument) ──► 400 VALIDATION_ERROR   │
//! │                    ├── Core(NotFound) ─────────► 404 NOT_FOUND          │
//! │                    ├── Core(InvalidState) ─────► 422 INVALID_STATE      │
//! │                    └── Store(..) ──────────────► 500 INTERNAL           │
//! │                                                   (generic message,     │
//! │                                                    details logged)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! This is what the client receives when a request fails:
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Product with ID 999 not found."
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use basket_core::{CoreError, ErrorKind, ValidationError};
use serde::Serialize;

use crate::services::ServiceError;

/// Message returned for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// API error returned from handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// Resource not found (404)
    NotFound,

    /// Operation not allowed in the current state (422)
    InvalidState,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidState => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error. The message is fixed; log details first.
    pub fn internal() -> Self {
        ApiError::new(ErrorCode::Internal, INTERNAL_ERROR_MESSAGE)
    }
}

/// Converts core errors by taxonomy kind.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match err.kind() {
            ErrorKind::InvalidArgument => ErrorCode::ValidationError,
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::InvalidState => ErrorCode::InvalidState,
        };
        tracing::warn!(?code, error = %err, "request rejected");
        ApiError::new(code, err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        CoreError::from(err).into()
    }
}

/// Converts service errors; storage faults never leak their details.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(e) => e.into(),
            ServiceError::Store(e) => {
                tracing::error!("Cart store failure: {}", e);
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
