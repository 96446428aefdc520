//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Checkout API                       │
//! │                                                                         │
//! │  Handler returns Result<T, ApiError>                                   │
//! │         │                                                               │
//! │         ├── StoreError::NotFound ────────► 404 NOT_FOUND                │
//! │         ├── StoreError::Conflict ────────► 409 CONFLICT                 │
//! │         ├── CoreError::Validation ───────► 400 VALIDATION_ERROR         │
//! │         ├── CoreError::UnknownItem ──────► 400 UNKNOWN_ITEM             │
//! │         └── CoreError::PriceOverflow ────► 422 PRICE_OVERFLOW (warn)    │
//! │                                                                         │
//! │  Body: { "code": "NOT_FOUND", "message": "Cart not found: 3f2a..." }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use checkout_core::{CoreError, ValidationError};
use checkout_store::StoreError;
use serde::Serialize;

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_ITEM",
///   "message": "Unknown item: Z"
/// }
/// ```
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
    /// Cart or rule not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Scanned item is not priced by the cart (400)
    UnknownItem,

    /// Rule already exists (409)
    Conflict,

    /// Scan refused because the total would leave the i64 range (422)
    PriceOverflow,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::UnknownItem => StatusCode::BAD_REQUEST,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::PriceOverflow => StatusCode::UNPROCESSABLE_ENTITY,
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
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
            CoreError::UnknownItem(_) => ApiError::new(ErrorCode::UnknownItem, err.to_string()),
            CoreError::PriceOverflow { .. } => {
                tracing::warn!(error = %err, "Scan rejected, total out of range");
                ApiError::new(ErrorCode::PriceOverflow, err.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(ErrorCode::ValidationError, err.to_string())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::new(ErrorCode::NotFound, err.to_string()),
            StoreError::Conflict { .. } => ApiError::new(ErrorCode::Conflict, err.to_string()),
            StoreError::Core(e) => ApiError::from(e),
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
