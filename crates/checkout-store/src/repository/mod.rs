//! # Repository Module
//!
//! In-memory repositories for the checkout service.
//!
//! ## Lock Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Lock Per Map, Never Two At Once                  │
//! │                                                                         │
//! │  RuleRegistry      Mutex<HashMap<code, PricingRule>>                   │
//! │  SessionStore      Mutex<HashMap<id, SharedCheckout>>                  │
//! │  SharedCheckout    Mutex<Checkout>   (one per cart)                    │
//! │                                                                         │
//! │  create_cart():  lock registry → copy rules → unlock                   │
//! │                  lock sessions → insert       → unlock                 │
//! │                                                                         │
//! │  scan():         lock sessions → clone handle → unlock                 │
//! │                  lock cart     → scan + total → unlock                 │
//! │                                                                         │
//! │  Critical sections are in-memory only: no I/O, no `.await`.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RuleRegistry`](rules::RuleRegistry) - Pricing rule CRUD and reset
//! - [`SessionStore`](sessions::SessionStore) - Cart session lifecycle

pub mod rules;
pub mod sessions;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Acquires `mutex`, recovering the guard if a previous holder panicked.
///
/// Every critical section validates before it mutates, so the data behind a
/// poisoned lock is still consistent.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
