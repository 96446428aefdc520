//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Pricing / basket failures                      │
//! │  └── ValidationError  - Malformed input to a constructor or operation  │
//! │                                                                         │
//! │  checkout-store errors (separate crate)                                │
//! │  └── StoreError       - NotFound / Conflict on shared state            │
//! │                                                                         │
//! │  checkout-api errors (in app)                                          │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item code, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing and basket errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Scanned item has no rule in the basket's catalog.
    ///
    /// ## When This Occurs
    /// - Item code was never in the registry
    /// - Rule was created AFTER the cart was opened (carts are price-frozen)
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Price for an item no longer fits in an `i64`.
    #[error("Price for {item_code} exceeds the representable range")]
    PriceOverflow { item_code: String },

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched, so a failed call never leaves a
/// partially-built rule or a half-applied scan behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing, empty or whitespace.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates a Negative error for a field.
    pub fn negative(field: impl Into<String>) -> Self {
        ValidationError::Negative {
            field: field.into(),
        }
    }

    /// Creates a MustBePositive error for a field.
    pub fn must_be_positive(field: impl Into<String>) -> Self {
        ValidationError::MustBePositive {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownItem("Z".to_string());
        assert_eq!(err.to_string(), "Unknown item: Z");

        let err = CoreError::PriceOverflow {
            item_code: "A".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Price for A exceeds the representable range"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::required("Item code").to_string(),
            "Item code cannot be empty"
        );
        assert_eq!(
            ValidationError::negative("Price").to_string(),
            "Price cannot be negative"
        );
        assert_eq!(
            ValidationError::must_be_positive("Offer quantity").to_string(),
            "Offer quantity must be positive"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("Item code").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        // The wrapper is transparent in messages
        assert_eq!(core_err.to_string(), "Item code cannot be empty");
    }
}
