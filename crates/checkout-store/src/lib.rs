//! # checkout-store: Shared State for the Checkout Service
//!
//! This crate holds the process-wide, in-memory state: the pricing rule
//! registry and the open cart sessions. Nothing here survives a restart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (scan)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   checkout-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  RuleRegistry  │    │ SessionStore │  │   │
//! │  │   │  (store.rs)   │───►│  Mutex<Map>    │◄───│ Mutex<Map>   │  │   │
//! │  │   │               │    │  code → rule   │    │ id → cart    │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────┬───────┘  │   │
//! │  │                                                     │          │   │
//! │  │                                   ┌─────────────────▼───────┐  │   │
//! │  │                                   │ SharedCheckout          │  │   │
//! │  │                                   │ Arc<Mutex<Checkout>>    │  │   │
//! │  │                                   └─────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `Store` facade wiring registry and sessions together
//! - [`repository`] - `RuleRegistry` and `SessionStore`
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use checkout_store::Store;
//!
//! let store = Store::new();
//! let cart_id = store.sessions().create_cart();
//!
//! let cart = store.sessions().get_cart(&cart_id).unwrap();
//! let total = cart
//!     .with_checkout_mut(|checkout| {
//!         checkout.scan("A")?;
//!         checkout.total_price()
//!     })
//!     .unwrap();
//! assert_eq!(total, 50);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::rules::RuleRegistry;
pub use repository::sessions::{SessionStore, SharedCheckout};
