//! # Store Error Types
//!
//! Error types for registry and session operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError / CoreError (checkout-core)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds NotFound / Conflict                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (checkout-api) ← Mapped to an HTTP status                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use checkout_core::{CoreError, ValidationError};
use thiserror::Error;

/// Registry and session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Referenced entity does not exist.
    ///
    /// ## When This Occurs
    /// - Unknown or deleted cart id
    /// - Pricing rule missing for an item code
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Entity with the same key already exists.
    ///
    /// ## When This Occurs
    /// - Creating a rule for an item code that already has one
    #[error("{entity} for {id} already exists")]
    Conflict { entity: String, id: String },

    /// Domain failure (validation, unknown item, overflow).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Conflict error.
    pub fn conflict(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::Conflict {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("Cart", "abc").to_string(),
            "Cart not found: abc"
        );
        assert_eq!(
            StoreError::conflict("Rule", "A").to_string(),
            "Rule for A already exists"
        );
        assert_eq!(
            StoreError::from(ValidationError::negative("Price")).to_string(),
            "Price cannot be negative"
        );
    }
}
