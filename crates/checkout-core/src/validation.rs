//! # Validation Module
//!
//! Input validation and item code normalization.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum)                                        │
//! │  ├── JSON shape, integer types                                         │
//! │  └── Rejects malformed bodies before any handler runs                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Empty / whitespace item codes                                     │
//! │  ├── Negative prices and quantities                                    │
//! │  └── Non-positive offer bundle sizes                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Duplicate item codes (Conflict)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{normalize_item_code, validate_price};
//!
//! assert_eq!(normalize_item_code(" a ").unwrap(), "A");
//! assert!(validate_price("Price", -1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Item Codes
// =============================================================================

/// Normalizes an item code: trims surrounding whitespace and uppercases.
///
/// Every registry key and every basket key passes through here, which is what
/// makes lookups case-insensitive. Normalizing an already normalized code
/// returns it unchanged.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::normalize_item_code;
///
/// assert_eq!(normalize_item_code("a").unwrap(), "A");
/// assert_eq!(normalize_item_code("A").unwrap(), "A");
/// assert!(normalize_item_code("   ").is_err());
/// ```
pub fn normalize_item_code(raw: &str) -> ValidationResult<String> {
    let code = raw.trim();

    if code.is_empty() {
        return Err(ValidationError::required("Item code"));
    }

    Ok(code.to_uppercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price (unit price or special price).
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, "buy N get them free" bundles)
pub fn validate_price(field: &str, price: i64) -> ValidationResult<()> {
    if price < 0 {
        return Err(ValidationError::negative(field));
    }

    Ok(())
}

/// Validates a bulk-offer bundle size. Must be strictly positive.
pub fn validate_bundle_size(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::must_be_positive("Offer quantity"));
    }

    Ok(())
}

/// Validates a quantity passed to a price calculation.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::negative("Quantity"));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_item_code() {
        assert_eq!(normalize_item_code("a").unwrap(), "A");
        assert_eq!(normalize_item_code("Ab-1").unwrap(), "AB-1");
        assert_eq!(normalize_item_code("  c\t").unwrap(), "C");

        assert!(normalize_item_code("").is_err());
        assert!(normalize_item_code("   ").is_err());
        assert!(normalize_item_code("\n").is_err());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["a", "B", " xYz ", "e4"] {
            let once = normalize_item_code(raw).unwrap();
            let twice = normalize_item_code(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("Price", 0).is_ok());
        assert!(validate_price("Price", 50).is_ok());

        let err = validate_price("Price", -1).unwrap_err();
        assert_eq!(err, ValidationError::negative("Price"));
    }

    #[test]
    fn test_validate_bundle_size() {
        assert!(validate_bundle_size(1).is_ok());
        assert!(validate_bundle_size(3).is_ok());

        assert!(validate_bundle_size(0).is_err());
        assert!(validate_bundle_size(-2).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(20).is_ok());
        assert!(validate_quantity(-1).is_err());
    }
}
