//! # HTTP Routes
//!
//! ## Route Table
//! ```text
//! ┌──────────┬───────────────────────────────────────┬──────────────────────┐
//! │ Method   │ Path                                  │ Handler              │
//! ├──────────┼───────────────────────────────────────┼──────────────────────┤
//! │ POST     │ /api/checkout/start                   │ checkout::start_cart │
//! │ POST     │ /api/checkout/{cart_id}/scan/{item}   │ checkout::scan_item  │
//! │ GET      │ /api/checkout/{cart_id}/total         │ checkout::get_total  │
//! │ POST     │ /api/checkout/{cart_id}/clear         │ checkout::clear_cart │
//! │ GET      │ /api/checkout/{cart_id}/rules         │ checkout::cart_rules │
//! │ DELETE   │ /api/checkout/{cart_id}               │ checkout::delete_cart│
//! │ GET/POST │ /api/pricingrules                     │ rules::list / create │
//! │ POST     │ /api/pricingrules/reset               │ rules::reset_rules   │
//! │ GET/PUT/ │ /api/pricingrules/{item_code}         │ rules::get / update /│
//! │ DELETE   │                                       │   delete             │
//! │ GET      │ /health                               │ health               │
//! └──────────┴───────────────────────────────────────┴──────────────────────┘
//! ```

pub mod checkout;
pub mod rules;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::AppState;

/// Assembles every route over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/checkout/start", post(checkout::start_cart))
        .route("/api/checkout/{cart_id}", delete(checkout::delete_cart))
        .route(
            "/api/checkout/{cart_id}/scan/{item}",
            post(checkout::scan_item),
        )
        .route("/api/checkout/{cart_id}/total", get(checkout::get_total))
        .route("/api/checkout/{cart_id}/clear", post(checkout::clear_cart))
        .route("/api/checkout/{cart_id}/rules", get(checkout::cart_rules))
        .route(
            "/api/pricingrules",
            get(rules::list_rules).post(rules::create_rule),
        )
        .route("/api/pricingrules/reset", post(rules::reset_rules))
        .route(
            "/api/pricingrules/{item_code}",
            get(rules::get_rule)
                .put(rules::update_rule)
                .delete(rules::delete_rule),
        )
        .with_state(state)
}

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub rules: usize,
    pub sessions: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        rules: state.store.rules().len(),
        sessions: state.store.sessions().len(),
    })
}
