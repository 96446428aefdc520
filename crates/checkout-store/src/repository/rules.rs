//! # Pricing Rule Registry
//!
//! The authoritative, mutable catalog of pricing rules shared by every
//! session.
//!
//! ## Key Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation           Code absent           Code present                 │
//! │  ─────────────────   ───────────────────   ───────────────────────────  │
//! │  get(code)           None                  Some(rule)                   │
//! │  create(code, ..)    insert → Ok(rule)     Err(Conflict)                │
//! │  update(code, ..)    Ok(None), no insert   replace → Ok(Some(rule))     │
//! │  delete(code)        false                 remove → true                │
//! │  reset_to_defaults   whole map swapped for A, B, C, D                   │
//! │                                                                         │
//! │  Codes are normalized on EVERY call: "a", " A", "A" are one key.        │
//! │  Validation runs BEFORE the lock is taken: a bad rule never lands.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use checkout_core::{default_rules, normalize_item_code, PricingRule, SpecialOffer};
use tracing::{debug, info};

use super::lock;
use crate::error::{StoreError, StoreResult};

/// Thread-safe pricing rule catalog.
///
/// ## Usage
/// ```rust
/// use checkout_store::RuleRegistry;
///
/// let registry = RuleRegistry::new();
/// assert_eq!(registry.get("a").unwrap().unit_price(), 50);
///
/// registry.create("E", 25, None).unwrap();
/// assert!(registry.create("e", 30, None).is_err()); // Conflict
/// ```
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Mutex<HashMap<String, PricingRule>>,
}

impl RuleRegistry {
    /// Creates a registry seeded with the default catalog.
    pub fn new() -> Self {
        Self::from_rules(default_rules())
    }

    /// Creates a registry seeded with `rules`. Later duplicates replace
    /// earlier ones.
    pub fn from_rules(rules: impl IntoIterator<Item = PricingRule>) -> Self {
        RuleRegistry {
            rules: Mutex::new(index_by_code(rules)),
        }
    }

    /// Returns a copy of every rule, ordered by item code.
    pub fn get_all(&self) -> Vec<PricingRule> {
        let mut rules: Vec<PricingRule> = lock(&self.rules).values().cloned().collect();
        rules.sort_by(|a, b| a.item_code().cmp(b.item_code()));
        rules
    }

    /// Looks up the rule for `item_code` (case-insensitive).
    pub fn get(&self, item_code: &str) -> Option<PricingRule> {
        let code = normalize_item_code(item_code).ok()?;
        lock(&self.rules).get(&code).cloned()
    }

    /// Adds a new rule.
    ///
    /// ## Errors
    /// - Validation errors from building the rule (nothing is stored)
    /// - `Conflict` if the normalized code already has a rule
    pub fn create(
        &self,
        item_code: &str,
        unit_price: i64,
        special_offer: Option<SpecialOffer>,
    ) -> StoreResult<PricingRule> {
        let rule = PricingRule::new(item_code, unit_price, special_offer)?;

        let mut rules = lock(&self.rules);
        if rules.contains_key(rule.item_code()) {
            return Err(StoreError::conflict("Rule", rule.item_code()));
        }
        rules.insert(rule.item_code().to_string(), rule.clone());
        drop(rules);

        info!(item_code = %rule.item_code(), unit_price, "Pricing rule created");
        Ok(rule)
    }

    /// Replaces the rule for an existing code.
    ///
    /// ## Returns
    /// - `Ok(Some(rule))` with the replacement
    /// - `Ok(None)` if the code has no rule (update never creates)
    /// - `Err(..)` if the new values are invalid
    pub fn update(
        &self,
        item_code: &str,
        unit_price: i64,
        special_offer: Option<SpecialOffer>,
    ) -> StoreResult<Option<PricingRule>> {
        let rule = PricingRule::new(item_code, unit_price, special_offer)?;

        let mut rules = lock(&self.rules);
        let Some(slot) = rules.get_mut(rule.item_code()) else {
            debug!(item_code = %rule.item_code(), "Update skipped, no such rule");
            return Ok(None);
        };
        *slot = rule.clone();
        drop(rules);

        info!(item_code = %rule.item_code(), unit_price, "Pricing rule updated");
        Ok(Some(rule))
    }

    /// Removes the rule for `item_code`. Returns whether one was removed.
    pub fn delete(&self, item_code: &str) -> bool {
        let Ok(code) = normalize_item_code(item_code) else {
            return false;
        };

        let removed = lock(&self.rules).remove(&code).is_some();
        if removed {
            info!(item_code = %code, "Pricing rule deleted");
        }
        removed
    }

    /// Replaces the whole catalog with the defaults (A, B, C, D).
    ///
    /// The new map is built first and swapped in under a single lock, so no
    /// reader ever sees a half-reset catalog.
    pub fn reset_to_defaults(&self) {
        let defaults = index_by_code(default_rules());
        *lock(&self.rules) = defaults;

        info!("Pricing rules reset to defaults");
    }

    /// Number of rules in the catalog.
    pub fn len(&self) -> usize {
        lock(&self.rules).len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        lock(&self.rules).is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn index_by_code(rules: impl IntoIterator<Item = PricingRule>) -> HashMap<String, PricingRule> {
    rules
        .into_iter()
        .map(|rule| (rule.item_code().to_string(), rule))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
