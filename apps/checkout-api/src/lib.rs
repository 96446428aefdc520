//! # Checkout API
//!
//! JSON HTTP surface over the checkout store.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP request                                                           │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  TraceLayer ──► CorsLayer ──► Router                                    │
//! │                                  │                                      │
//! │                ┌─────────────────┼─────────────────┐                    │
//! │                ▼                 ▼                 ▼                    │
//! │         routes::checkout   routes::rules    routes::health             │
//! │                │                 │                 │                    │
//! │                └────────► State<Arc<AppState>> ◄───┘                    │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                          checkout_store::Store                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The router is built by [`build_router`] so tests can drive it in-process
//! without binding a socket.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use checkout_store::Store;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};

/// Shared application state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// Pricing rules and open carts
    pub store: Store,

    /// Runtime configuration
    pub config: ApiConfig,
}

impl AppState {
    /// Creates state with the default catalog and no carts.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            store: Store::new(),
            config,
        }
    }
}

/// Builds the full application router with middleware applied.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_any = state.config.cors_any;
    let router = routes::router(state).layer(TraceLayer::new_for_http());

    if cors_any {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
