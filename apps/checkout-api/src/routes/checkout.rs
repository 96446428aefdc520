//! # Checkout Routes
//!
//! Cart lifecycle: start, scan, total, clear, inspect, delete.
//!
//! Every handler resolves the cart id first; an unknown id is a 404 with
//! `{"code":"NOT_FOUND"}`. Scan and the summary it returns run under one
//! cart lock, so the response always reflects exactly this scan.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use checkout_core::{CheckoutSummary, PricingRule};
use checkout_store::{SharedCheckout, StoreError};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// Response for a newly opened cart.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreatedResponse {
    pub cart_id: String,
}

fn find_cart(state: &AppState, cart_id: &str) -> Result<SharedCheckout, ApiError> {
    state
        .store
        .sessions()
        .get_cart(cart_id)
        .ok_or_else(|| StoreError::not_found("Cart", cart_id).into())
}

/// Opens a new cart priced with the current catalog.
pub async fn start_cart(State(state): State<Arc<AppState>>) -> Json<CartCreatedResponse> {
    let cart_id = state.store.sessions().create_cart();
    Json(CartCreatedResponse { cart_id })
}

/// Scans one unit of `item` and returns the updated summary.
pub async fn scan_item(
    State(state): State<Arc<AppState>>,
    Path((cart_id, item)): Path<(String, String)>,
) -> Result<Json<CheckoutSummary>, ApiError> {
    let cart = find_cart(&state, &cart_id)?;

    let summary = cart.with_checkout_mut(|checkout| {
        checkout.scan(&item)?;
        checkout.summary()
    })?;

    debug!(cart_id = %cart_id, item = %item, total = summary.total, "Item scanned");
    Ok(Json(summary))
}

/// Returns the current total and per-item quantities.
pub async fn get_total(
    State(state): State<Arc<AppState>>,
    Path(cart_id): Path<String>,
) -> Result<Json<CheckoutSummary>, ApiError> {
    let cart = find_cart(&state, &cart_id)?;
    let summary = cart.with_checkout(|checkout| checkout.summary())?;
    Ok(Json(summary))
}

/// Empties the cart, keeping its rules.
pub async fn clear_cart(
    State(state): State<Arc<AppState>>,
    Path(cart_id): Path<String>,
) -> Result<Json<CheckoutSummary>, ApiError> {
    let cart = find_cart(&state, &cart_id)?;

    let (lines, summary) = cart.with_checkout_mut(|checkout| {
        let lines = checkout.item_count();
        checkout.clear();
        checkout.summary().map(|summary| (lines, summary))
    })?;

    debug!(cart_id = %cart_id, lines, "Cart cleared");
    Ok(Json(summary))
}

/// Lists the rules this cart was priced with.
pub async fn cart_rules(
    State(state): State<Arc<AppState>>,
    Path(cart_id): Path<String>,
) -> Result<Json<Vec<PricingRule>>, ApiError> {
    let cart = find_cart(&state, &cart_id)?;
    let rules = cart.with_checkout(|checkout| checkout.pricing_rules().cloned().collect());
    Ok(Json(rules))
}

/// Closes the cart.
pub async fn delete_cart(
    State(state): State<Arc<AppState>>,
    Path(cart_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.sessions().delete_cart(&cart_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StoreError::not_found("Cart", cart_id).into())
    }
}
