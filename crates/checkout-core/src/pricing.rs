//! # Pricing Module
//!
//! Per-item pricing rules and the "N for X" bulk offer arithmetic.
//!
//! ## How an Offer Prices a Quantity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule A: unit 50, offer 3 for 130          Scanned: 7 × A               │
//! │                                                                         │
//! │   ┌───┬───┬───┐ ┌───┬───┬───┐ ┌───┐                                     │
//! │   │ A │ A │ A │ │ A │ A │ A │ │ A │                                     │
//! │   └───┴───┴───┘ └───┴───┴───┘ └───┘                                     │
//! │     bundle 130    bundle 130   unit 50                                  │
//! │                                                                         │
//! │   bundles   = 7 div 3 = 2   →  2 × 130 = 260                            │
//! │   leftovers = 7 mod 3 = 1   →  1 ×  50 =  50                            │
//! │                                          ─────                          │
//! │                                           310                           │
//! │                                                                         │
//! │  Integer arithmetic only: no rounding, no drift.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::{
    normalize_item_code, validate_bundle_size, validate_price, validate_quantity,
    ValidationResult,
};

// =============================================================================
// Special Offer
// =============================================================================

/// A bulk discount: `quantity` units together cost `special_price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SpecialOffer {
    quantity: i64,
    special_price: i64,
}

impl SpecialOffer {
    /// Creates a validated offer.
    ///
    /// ## Rules
    /// - `quantity` (bundle size) must be > 0
    /// - `special_price` must be >= 0
    pub fn new(quantity: i64, special_price: i64) -> ValidationResult<Self> {
        validate_bundle_size(quantity)?;
        validate_price("Price", special_price)?;

        Ok(SpecialOffer {
            quantity,
            special_price,
        })
    }

    /// Bundle size.
    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price for exactly one bundle.
    #[inline]
    pub const fn special_price(&self) -> i64 {
        self.special_price
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// How to price one item code.
///
/// ## Invariants
/// - `item_code` is normalized (trimmed, uppercase) and non-empty
/// - `unit_price` is >= 0
/// - Immutable: an "update" builds a new rule
///
/// ## Wire Shape
/// ```json
/// { "itemCode": "A", "unitPrice": 50,
///   "specialOffer": { "quantity": 3, "specialPrice": 130 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingRule {
    item_code: String,
    unit_price: i64,
    special_offer: Option<SpecialOffer>,
}

impl PricingRule {
    /// Creates a validated rule, normalizing the item code.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{PricingRule, SpecialOffer};
    ///
    /// let offer = SpecialOffer::new(3, 130).unwrap();
    /// let rule = PricingRule::new("a", 50, Some(offer)).unwrap();
    /// assert_eq!(rule.item_code(), "A");
    ///
    /// assert!(PricingRule::new(" ", 50, None).is_err());
    /// assert!(PricingRule::new("B", -1, None).is_err());
    /// ```
    pub fn new(
        item_code: &str,
        unit_price: i64,
        special_offer: Option<SpecialOffer>,
    ) -> ValidationResult<Self> {
        let item_code = normalize_item_code(item_code)?;
        validate_price("Price", unit_price)?;

        Ok(PricingRule {
            item_code,
            unit_price,
            special_offer,
        })
    }

    /// Normalized item code.
    #[inline]
    pub fn item_code(&self) -> &str {
        &self.item_code
    }

    /// Price of a single unit without any offer.
    #[inline]
    pub const fn unit_price(&self) -> i64 {
        self.unit_price
    }

    /// The bulk offer, if any.
    #[inline]
    pub const fn special_offer(&self) -> Option<SpecialOffer> {
        self.special_offer
    }

    /// Prices `quantity` units of this item.
    ///
    /// ## Formula
    /// - No offer: `quantity × unit_price`
    /// - Offer `(q, p)`: `(quantity div q) × p + (quantity mod q) × unit_price`
    ///
    /// ## Errors
    /// - `Validation` if `quantity` is negative
    /// - `PriceOverflow` if the result does not fit in an `i64`
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{PricingRule, SpecialOffer};
    ///
    /// let rule = PricingRule::new("A", 50, SpecialOffer::new(3, 130).ok()).unwrap();
    /// assert_eq!(rule.calculate_price(0).unwrap(), 0);
    /// assert_eq!(rule.calculate_price(4).unwrap(), 180);
    /// assert!(rule.calculate_price(-1).is_err());
    /// ```
    pub fn calculate_price(&self, quantity: i64) -> CoreResult<i64> {
        validate_quantity(quantity)?;

        if quantity == 0 {
            return Ok(0);
        }

        let price = match self.special_offer {
            Some(offer) => {
                let bundles = quantity / offer.quantity;
                let leftovers = quantity % offer.quantity;
                bundles
                    .checked_mul(offer.special_price)
                    .zip(leftovers.checked_mul(self.unit_price))
                    .and_then(|(bundled, single)| bundled.checked_add(single))
            }
            None => quantity.checked_mul(self.unit_price),
        };

        price.ok_or_else(|| CoreError::PriceOverflow {
            item_code: self.item_code.clone(),
        })
    }
}

// =============================================================================
// Default Catalog
// =============================================================================

/// The fixed default catalog.
///
/// | Item | Unit | Offer      |
/// |------|------|------------|
/// | A    | 50   | 3 for 130  |
/// | B    | 30   | 2 for 45   |
/// | C    | 20   | -          |
/// | D    | 15   | -          |
pub fn default_rules() -> Vec<PricingRule> {
    vec![
        PricingRule::const_rule("A", 50, Some((3, 130))),
        PricingRule::const_rule("B", 30, Some((2, 45))),
        PricingRule::const_rule("C", 20, None),
        PricingRule::const_rule("D", 15, None),
    ]
}

impl PricingRule {
    /// Builds a rule from literals already known to be valid.
    fn const_rule(item_code: &str, unit_price: i64, offer: Option<(i64, i64)>) -> Self {
        PricingRule {
            item_code: item_code.to_string(),
            unit_price,
            special_offer: offer.map(|(quantity, special_price)| SpecialOffer {
                quantity,
                special_price,
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn rule_a() -> PricingRule {
        PricingRule::new("A", 50, Some(SpecialOffer::new(3, 130).unwrap())).unwrap()
    }

    #[test]
    fn test_special_offer_validation() {
        let offer = SpecialOffer::new(3, 130).unwrap();
        assert_eq!(offer.quantity(), 3);
        assert_eq!(offer.special_price(), 130);

        // Free bundles are allowed
        assert!(SpecialOffer::new(2, 0).is_ok());

        assert_eq!(
            SpecialOffer::new(0, 100).unwrap_err(),
            ValidationError::must_be_positive("Offer quantity")
        );
        assert!(SpecialOffer::new(-1, 100).is_err());
        assert!(SpecialOffer::new(2, -1).is_err());
    }

    #[test]
    fn test_rule_validation() {
        assert_eq!(
            PricingRule::new("", 50, None).unwrap_err(),
            ValidationError::required("Item code")
        );
        assert!(PricingRule::new("   ", 50, None).is_err());
        assert_eq!(
            PricingRule::new("A", -10, None).unwrap_err(),
            ValidationError::negative("Price")
        );
        assert!(PricingRule::new("A", 0, None).is_ok());
    }

    #[test]
    fn test_rule_normalizes_item_code() {
        let rule = PricingRule::new("a", 50, None).unwrap();
        assert_eq!(rule.item_code(), "A");
    }

    #[test]
    fn test_price_without_offer() {
        let rule = PricingRule::new("C", 20, None).unwrap();
        assert_eq!(rule.calculate_price(0).unwrap(), 0);
        assert_eq!(rule.calculate_price(1).unwrap(), 20);
        assert_eq!(rule.calculate_price(5).unwrap(), 100);
    }

    #[test]
    fn test_price_with_offer() {
        let rule = rule_a();
        assert_eq!(rule.calculate_price(1).unwrap(), 50);
        assert_eq!(rule.calculate_price(2).unwrap(), 100);
        assert_eq!(rule.calculate_price(3).unwrap(), 130);
        assert_eq!(rule.calculate_price(4).unwrap(), 180);
        assert_eq!(rule.calculate_price(6).unwrap(), 260);
        assert_eq!(rule.calculate_price(20).unwrap(), 880);
    }

    #[test]
    fn test_price_matches_formula() {
        let offers = [None, Some((1, 0)), Some((2, 45)), Some((3, 130)), Some((5, 7))];

        for offer in offers {
            let special_offer = offer.map(|(q, p)| SpecialOffer::new(q, p).unwrap());
            let rule = PricingRule::new("X", 30, special_offer).unwrap();

            for n in 0..50 {
                let expected = match offer {
                    Some((q, p)) => (n / q) * p + (n % q) * 30,
                    None => n * 30,
                };
                assert_eq!(rule.calculate_price(n).unwrap(), expected, "n={n}");
            }
        }
    }

    #[test]
    fn test_negative_quantity_fails() {
        for rule in [rule_a(), PricingRule::new("D", 15, None).unwrap()] {
            let err = rule.calculate_price(-1).unwrap_err();
            assert_eq!(err, CoreError::Validation(ValidationError::negative("Quantity")));
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let rule = PricingRule::new("BIG", i64::MAX, None).unwrap();
        assert_eq!(rule.calculate_price(1).unwrap(), i64::MAX);
        assert_eq!(
            rule.calculate_price(2).unwrap_err(),
            CoreError::PriceOverflow {
                item_code: "BIG".to_string()
            }
        );
    }

    #[test]
    fn test_default_rules() {
        let rules = default_rules();
        assert_eq!(rules.len(), 4);

        let expected = [
            ("A", 50, Some((3, 130))),
            ("B", 30, Some((2, 45))),
            ("C", 20, None),
            ("D", 15, None),
        ];
        for (rule, (code, unit, offer)) in rules.iter().zip(expected) {
            assert_eq!(rule.item_code(), code);
            assert_eq!(rule.unit_price(), unit);
            assert_eq!(
                rule.special_offer().map(|o| (o.quantity(), o.special_price())),
                offer
            );
        }
    }

    #[test]
    fn test_rule_serializes_camel_case() {
        let json = serde_json::to_value(rule_a()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "itemCode": "A",
                "unitPrice": 50,
                "specialOffer": { "quantity": 3, "specialPrice": 130 }
            })
        );

        let json = serde_json::to_value(PricingRule::new("C", 20, None).unwrap()).unwrap();
        assert_eq!(json["specialOffer"], serde_json::Value::Null);
    }
}
