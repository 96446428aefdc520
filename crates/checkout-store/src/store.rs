//! # Store
//!
//! Wires the rule registry and the session store together.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main()                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  Store::new() ──► Arc<RuleRegistry> (defaults) ◄── SessionStore         │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  Arc<AppState { store, .. }> ──► every HTTP handler                     │
//! │                                                                         │
//! │  One Store per process. No statics, no globals.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use checkout_core::PricingRule;

use crate::repository::rules::RuleRegistry;
use crate::repository::sessions::SessionStore;

/// Process-wide state: the pricing catalog and the open carts.
#[derive(Debug)]
pub struct Store {
    rules: Arc<RuleRegistry>,
    sessions: SessionStore,
}

impl Store {
    /// Creates a store with the default catalog and no carts.
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::new())
    }

    /// Creates a store with a custom starting catalog.
    pub fn with_rules(rules: impl IntoIterator<Item = PricingRule>) -> Self {
        Self::with_registry(RuleRegistry::from_rules(rules))
    }

    fn with_registry(registry: RuleRegistry) -> Self {
        let rules = Arc::new(registry);
        let sessions = SessionStore::new(Arc::clone(&rules));
        Store { rules, sessions }
    }

    /// Returns the pricing rule registry.
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Returns the cart session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
