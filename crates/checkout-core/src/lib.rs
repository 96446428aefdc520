//! # checkout-core: Pure Pricing Logic
//!
//! This crate is the **heart** of the checkout service. It contains the
//! pricing rules, the bulk-offer arithmetic and the basket, all as plain
//! values with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    checkout-api (axum)                          │   │
//! │  │    /api/checkout/...          /api/pricingrules/...             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    checkout-store                               │   │
//! │  │    RuleRegistry (Mutex)       SessionStore (Mutex)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐          │   │
//! │  │   │   pricing   │   │  checkout   │   │ validation  │          │   │
//! │  │   │ PricingRule │   │  Checkout   │   │  item code  │          │   │
//! │  │   │SpecialOffer │   │  (basket)   │   │  prices     │          │   │
//! │  │   └─────────────┘   └─────────────┘   └─────────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pricing`] - `PricingRule`, `SpecialOffer` and the default catalog
//! - [`checkout`] - The basket: scan, total, clear
//! - [`validation`] - Input validation and item code normalization
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same rules + same scans = same total
//! 2. **Integer Prices**: all prices are `i64` minor units, never floats
//! 3. **Explicit Errors**: every failure is a typed variant, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{default_rules, Checkout};
//!
//! let mut checkout = Checkout::new(default_rules());
//! for item in ["A", "A", "a", "B"] {
//!     checkout.scan(item).unwrap();
//! }
//!
//! // Three A's hit the 3-for-130 offer, plus one B at 30
//! assert_eq!(checkout.total_price().unwrap(), 160);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{Checkout, CheckoutSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{default_rules, PricingRule, SpecialOffer};
pub use validation::normalize_item_code;
