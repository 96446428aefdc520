//! # Checkout (Basket)
//!
//! A single customer's in-progress scan accumulation.
//!
//! ## Basket Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Lifecycle                                     │
//! │                                                                         │
//! │  Checkout::new(rules) ──► rules copied into the basket (frozen)        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────┐  scan("a")   ┌──────────────┐                         │
//! │  │    Empty     │─────────────►│   Scanning   │◄──┐ scan(..)            │
//! │  │  counts: {}  │              │ counts: {A:1}│───┘                     │
//! │  └──────────────┘              └──────┬───────┘                         │
//! │         ▲                             │                                 │
//! │         └──────────── clear() ────────┘                                 │
//! │                                                                         │
//! │  total_price() is recomputed from (frozen rules × counts) every time   │
//! │  Registry edits after creation NEVER reach an existing basket          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::iter;

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::pricing::PricingRule;
use crate::validation::normalize_item_code;

/// A basket bound to a snapshot of pricing rules.
///
/// ## Invariants
/// - Every key of `scanned` has a rule in `rules` (checked at scan time)
/// - Every count is >= 1 (codes appear on their first scan)
/// - The total of the current counts always fits in an `i64`
#[derive(Debug, Clone)]
pub struct Checkout {
    /// Item code → rule, captured when the basket was created.
    rules: BTreeMap<String, PricingRule>,

    /// Item code → number of units scanned.
    scanned: BTreeMap<String, i64>,
}

/// Running total plus per-item counts, as returned after scan/total/clear.
///
/// ```json
/// { "total": 180, "items": { "A": 4 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutSummary {
    pub total: i64,
    pub items: BTreeMap<String, i64>,
}

impl Checkout {
    /// Creates an empty basket priced by `rules`.
    ///
    /// Duplicate item codes collapse; the last rule for a code wins.
    pub fn new(rules: impl IntoIterator<Item = PricingRule>) -> Self {
        Checkout {
            rules: rules
                .into_iter()
                .map(|rule| (rule.item_code().to_string(), rule))
                .collect(),
            scanned: BTreeMap::new(),
        }
    }

    /// Scans one unit of `item`.
    ///
    /// ## Behavior
    /// - `"a"` and `"A"` count towards the same entry
    /// - Empty / whitespace input → `Validation`
    /// - Code not in this basket's rules → `UnknownItem`
    /// - A scan that would overflow the total is rejected and nothing changes
    pub fn scan(&mut self, item: &str) -> CoreResult<()> {
        let code = normalize_item_code(item)?;

        if !self.rules.contains_key(&code) {
            return Err(CoreError::UnknownItem(code));
        }

        let next = self
            .scanned
            .get(&code)
            .copied()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| CoreError::PriceOverflow {
                item_code: code.clone(),
            })?;

        // Price the basket as it would look after this scan before committing.
        let after_scan = self
            .scanned
            .iter()
            .filter(|(scanned_code, _)| **scanned_code != code)
            .map(|(scanned_code, count)| (scanned_code, *count))
            .chain(iter::once((&code, next)));
        self.sum_lines(after_scan)?;

        self.scanned.insert(code, next);
        Ok(())
    }

    /// Total price of everything scanned, using this basket's own rules.
    ///
    /// An empty basket costs 0.
    pub fn total_price(&self) -> CoreResult<i64> {
        self.sum_lines(self.scanned.iter().map(|(code, count)| (code, *count)))
    }

    /// Empties the basket. The rules snapshot is kept, so the basket can be
    /// reused straight away.
    pub fn clear(&mut self) {
        self.scanned.clear();
    }

    /// Read-only view of the per-item counts.
    pub fn scanned_items(&self) -> &BTreeMap<String, i64> {
        &self.scanned
    }

    /// The rules this basket prices with, ordered by item code.
    pub fn pricing_rules(&self) -> impl Iterator<Item = &PricingRule> {
        self.rules.values()
    }

    /// Number of distinct item codes scanned.
    pub fn item_count(&self) -> usize {
        self.scanned.len()
    }

    /// Checks if nothing has been scanned.
    pub fn is_empty(&self) -> bool {
        self.scanned.is_empty()
    }

    /// Total plus a copy of the counts.
    pub fn summary(&self) -> CoreResult<CheckoutSummary> {
        Ok(CheckoutSummary {
            total: self.total_price()?,
            items: self.scanned.clone(),
        })
    }

    fn sum_lines<'a>(&self, lines: impl Iterator<Item = (&'a String, i64)>) -> CoreResult<i64> {
        lines.into_iter().try_fold(0i64, |total, (code, count)| {
            let rule = self
                .rules
                .get(code)
                .ok_or_else(|| CoreError::UnknownItem(code.clone()))?;
            let line = rule.calculate_price(count)?;

            total
                .checked_add(line)
                .ok_or_else(|| CoreError::PriceOverflow {
                    item_code: code.clone(),
                })
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::pricing::{default_rules, SpecialOffer};

    fn scan_all(checkout: &mut Checkout, items: &[&str]) {
        for item in items {
            checkout.scan(item).unwrap();
        }
    }

    fn total_for(items: &[&str]) -> i64 {
        let mut checkout = Checkout::new(default_rules());
        scan_all(&mut checkout, items);
        checkout.total_price().unwrap()
    }

    #[test]
    fn test_empty_basket_costs_nothing() {
        let checkout = Checkout::new(default_rules());
        assert!(checkout.is_empty());
        assert_eq!(checkout.total_price().unwrap(), 0);
    }

    #[test]
    fn test_one_of_each() {
        assert_eq!(total_for(&["A", "B", "C", "D"]), 115);
    }

    #[test]
    fn test_offer_applies_to_bundle() {
        assert_eq!(total_for(&["A", "A", "A"]), 130);
    }

    #[test]
    fn test_bundle_plus_leftover() {
        assert_eq!(total_for(&["A"; 4]), 180);
        assert_eq!(total_for(&["B", "B", "B"]), 75);
    }

    #[test]
    fn test_many_bundles() {
        assert_eq!(total_for(&["A"; 20]), 880);
    }

    #[test]
    fn test_scan_order_does_not_matter() {
        assert_eq!(total_for(&["B", "A", "B", "A", "A"]), total_for(&["A", "A", "A", "B", "B"]));
        assert_eq!(total_for(&["D", "A", "B", "A", "B", "A"]), 190);
    }

    #[test]
    fn test_case_insensitive_scan() {
        let mut checkout = Checkout::new(default_rules());
        scan_all(&mut checkout, &["a", "A"]);

        assert_eq!(checkout.item_count(), 1);
        assert_eq!(checkout.scanned_items().get("A"), Some(&2));
        assert_eq!(checkout.total_price().unwrap(), 100);
    }

    #[test]
    fn test_scan_rejects_empty_item() {
        let mut checkout = Checkout::new(default_rules());

        for item in ["", "   "] {
            let err = checkout.scan(item).unwrap_err();
            assert_eq!(err, CoreError::Validation(ValidationError::required("Item code")));
        }
        assert!(checkout.is_empty());
    }

    #[test]
    fn test_scan_rejects_unknown_item() {
        let mut checkout = Checkout::new(default_rules());
        checkout.scan("A").unwrap();

        let err = checkout.scan("z").unwrap_err();
        assert_eq!(err, CoreError::UnknownItem("Z".to_string()));
        assert_eq!(err.to_string(), "Unknown item: Z");

        // Failed scan leaves the basket untouched
        assert_eq!(checkout.item_count(), 1);
        assert_eq!(checkout.total_price().unwrap(), 50);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut checkout = Checkout::new(default_rules());
        scan_all(&mut checkout, &["A", "B", "C"]);

        checkout.clear();
        assert!(checkout.is_empty());
        assert_eq!(checkout.total_price().unwrap(), 0);

        // Rules survive clear
        assert_eq!(checkout.pricing_rules().count(), 4);
        scan_all(&mut checkout, &["B", "B"]);
        assert_eq!(checkout.total_price().unwrap(), 45);
    }

    #[test]
    fn test_custom_rule() {
        let mut rules = default_rules();
        rules.push(PricingRule::new("E", 25, Some(SpecialOffer::new(4, 90).unwrap())).unwrap());

        let mut checkout = Checkout::new(rules);
        scan_all(&mut checkout, &["E", "e", "E", "e"]);
        assert_eq!(checkout.total_price().unwrap(), 90);
    }

    #[test]
    fn test_duplicate_rules_last_wins() {
        let rules = vec![
            PricingRule::new("A", 50, None).unwrap(),
            PricingRule::new("a", 10, None).unwrap(),
        ];

        let mut checkout = Checkout::new(rules);
        assert_eq!(checkout.pricing_rules().count(), 1);

        checkout.scan("A").unwrap();
        assert_eq!(checkout.total_price().unwrap(), 10);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut rules = default_rules();
        let checkout = Checkout::new(rules.clone());

        rules.clear();
        assert_eq!(checkout.pricing_rules().count(), 4);
    }

    #[test]
    fn test_overflowing_scan_is_rejected() {
        let rules = vec![
            PricingRule::new("BIG", i64::MAX, None).unwrap(),
            PricingRule::new("ONE", 1, None).unwrap(),
        ];
        let mut checkout = Checkout::new(rules);

        checkout.scan("BIG").unwrap();
        assert!(matches!(
            checkout.scan("ONE").unwrap_err(),
            CoreError::PriceOverflow { .. }
        ));
        assert!(matches!(
            checkout.scan("BIG").unwrap_err(),
            CoreError::PriceOverflow { .. }
        ));

        assert_eq!(checkout.scanned_items().get("BIG"), Some(&1));
        assert_eq!(checkout.item_count(), 1);
        assert_eq!(checkout.total_price().unwrap(), i64::MAX);
    }

    #[test]
    fn test_summary() {
        let mut checkout = Checkout::new(default_rules());
        scan_all(&mut checkout, &["A", "A", "A", "A", "b"]);

        let summary = checkout.summary().unwrap();
        assert_eq!(summary.total, 210);
        assert_eq!(summary.items.get("A"), Some(&4));
        assert_eq!(summary.items.get("B"), Some(&1));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json, serde_json::json!({ "total": 210, "items": { "A": 4, "B": 1 } }));
    }
}
