//! # Cart Sessions
//!
//! Open carts, keyed by an opaque session id.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  create_cart() ──► id = UUID v4                                        │
//! │       │            rules = registry.get_all()   ← snapshot, by value   │
//! │       │            carts[id] = Checkout::new(rules)                    │
//! │       ▼                                                                 │
//! │  get_cart(id) ──► SharedCheckout ──► scan / total / clear              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  delete_cart(id) ──► true (removed) / false (already gone)             │
//! │                                                                         │
//! │  Registry edits after create_cart() do NOT reach the cart:             │
//! │  carts are price-frozen at creation time.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use checkout_core::Checkout;
use tracing::{debug, info};
use uuid::Uuid;

use super::lock;
use super::rules::RuleRegistry;

// =============================================================================
// Shared Checkout
// =============================================================================

/// Handle to one cart, shared by every request that targets its id.
///
/// ## Thread Safety
/// Each cart has its own `Mutex`, so two requests on the same cart are
/// serialized while requests on different carts never contend. Every
/// `with_checkout*` call is one critical section: a scan and the total read
/// after it cannot interleave with another request's scan.
#[derive(Debug, Clone)]
pub struct SharedCheckout {
    checkout: Arc<Mutex<Checkout>>,
}

impl SharedCheckout {
    fn new(checkout: Checkout) -> Self {
        SharedCheckout {
            checkout: Arc::new(Mutex::new(checkout)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart.with_checkout(|c| c.total_price())?;
    /// ```
    pub fn with_checkout<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Checkout) -> R,
    {
        let checkout = lock(&self.checkout);
        f(&checkout)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart.with_checkout_mut(|c| c.scan("A"))?;
    /// ```
    pub fn with_checkout_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Checkout) -> R,
    {
        let mut checkout = lock(&self.checkout);
        f(&mut checkout)
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// Thread-safe map of session id → cart.
///
/// The lock guards the map only. Work on a cart happens through the
/// [`SharedCheckout`] handle after the map lock is released.
#[derive(Debug)]
pub struct SessionStore {
    registry: Arc<RuleRegistry>,
    carts: Mutex<HashMap<String, SharedCheckout>>,
}

impl SessionStore {
    /// Creates an empty store whose new carts are priced from `registry`.
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        SessionStore {
            registry,
            carts: Mutex::new(HashMap::new()),
        }
    }

    /// Opens a new cart priced with the registry's rules as of now.
    ///
    /// ## Returns
    /// The new session id (UUID v4, hyphenated).
    pub fn create_cart(&self) -> String {
        // Registry lock is released before the session lock is taken.
        let checkout = Checkout::new(self.registry.get_all());
        let rule_count = checkout.pricing_rules().count();

        let mut carts = lock(&self.carts);
        let mut id = Uuid::new_v4().to_string();
        while carts.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }
        carts.insert(id.clone(), SharedCheckout::new(checkout));
        let open = carts.len();
        drop(carts);

        info!(cart_id = %id, rule_count, open, "Cart created");
        id
    }

    /// Looks up a cart by session id.
    pub fn get_cart(&self, id: &str) -> Option<SharedCheckout> {
        let cart = lock(&self.carts).get(id).cloned();
        if cart.is_none() {
            debug!(cart_id = %id, "Cart lookup missed");
        }
        cart
    }

    /// Removes a cart. Returns `true` iff it existed.
    pub fn delete_cart(&self, id: &str) -> bool {
        let removed = lock(&self.carts).remove(id).is_some();
        if removed {
            info!(cart_id = %id, "Cart deleted");
        }
        removed
    }

    /// Number of open carts.
    pub fn len(&self) -> usize {
        lock(&self.carts).len()
    }

    /// Checks if no carts are open.
    pub fn is_empty(&self) -> bool {
        lock(&self.carts).is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{CoreError, SpecialOffer};
    use std::collections::HashSet;
    use std::thread;

    fn store() -> (Arc<RuleRegistry>, SessionStore) {
        let registry = Arc::new(RuleRegistry::new());
        let sessions = SessionStore::new(Arc::clone(&registry));
        (registry, sessions)
    }

    fn scan_total(cart: &SharedCheckout, items: &[&str]) -> i64 {
        cart.with_checkout_mut(|checkout| {
            for item in items {
                checkout.scan(item)?;
            }
            checkout.total_price()
        })
        .unwrap()
    }

    #[test]
    fn test_create_and_get_cart() {
        let (_, sessions) = store();

        let id = sessions.create_cart();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(sessions.len(), 1);

        let cart = sessions.get_cart(&id).unwrap();
        assert_eq!(scan_total(&cart, &["A", "B", "C", "D"]), 115);
    }

    #[test]
    fn test_ids_are_unique() {
        let (_, sessions) = store();
        let ids: HashSet<String> = (0..500).map(|_| sessions.create_cart()).collect();
        assert_eq!(ids.len(), 500);
        assert_eq!(sessions.len(), 500);
    }

    #[test]
    fn test_handles_share_one_cart() {
        let (_, sessions) = store();
        let id = sessions.create_cart();

        let first = sessions.get_cart(&id).unwrap();
        let second = sessions.get_cart(&id).unwrap();
        scan_total(&first, &["A", "A"]);

        assert_eq!(scan_total(&second, &["A"]), 130);
    }

    #[test]
    fn test_delete_cart() {
        let (_, sessions) = store();
        let id = sessions.create_cart();

        assert!(sessions.delete_cart(&id));
        assert!(sessions.get_cart(&id).is_none());
        assert!(!sessions.delete_cart(&id));
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_unknown_id_not_found() {
        let (_, sessions) = store();
        assert!(sessions.get_cart("no-such-cart").is_none());
        assert!(!sessions.delete_cart("no-such-cart"));
    }

    #[test]
    fn test_cart_is_price_frozen() {
        let (registry, sessions) = store();
        let before = sessions.create_cart();

        registry.update("A", 10, None).unwrap();
        registry
            .create("E", 25, Some(SpecialOffer::new(4, 90).unwrap()))
            .unwrap();
        let after = sessions.create_cart();

        let old_cart = sessions.get_cart(&before).unwrap();
        assert_eq!(scan_total(&old_cart, &["A", "A", "A"]), 130);
        let err = old_cart.with_checkout_mut(|c| c.scan("E")).unwrap_err();
        assert_eq!(err, CoreError::UnknownItem("E".to_string()));

        let new_cart = sessions.get_cart(&after).unwrap();
        assert_eq!(scan_total(&new_cart, &["A", "A", "A"]), 30);
        assert_eq!(scan_total(&new_cart, &["E", "E", "E", "E"]), 120);
    }

    #[test]
    fn test_deleted_rule_stays_in_existing_cart() {
        let (registry, sessions) = store();
        let id = sessions.create_cart();

        assert!(registry.delete("D"));

        let cart = sessions.get_cart(&id).unwrap();
        assert_eq!(scan_total(&cart, &["D"]), 15);
    }

    #[test]
    fn test_concurrent_scans_lose_nothing() {
        let (_, sessions) = store();
        let id = sessions.create_cart();

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let cart = sessions.get_cart(&id).unwrap();
                    for _ in 0..100 {
                        cart.with_checkout_mut(|c| c.scan("c")).unwrap();
                    }
                });
            }
        });

        let cart = sessions.get_cart(&id).unwrap();
        cart.with_checkout(|c| {
            assert_eq!(c.scanned_items().get("C"), Some(&800));
            assert_eq!(c.total_price().unwrap(), 16_000);
        });
    }

    #[test]
    fn test_concurrent_create_and_delete() {
        let (_, sessions) = store();

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        let id = sessions.create_cart();
                        assert!(sessions.get_cart(&id).is_some());
                        assert!(sessions.delete_cart(&id));
                    }
                });
            }
        });

        assert!(sessions.is_empty());
    }
}
