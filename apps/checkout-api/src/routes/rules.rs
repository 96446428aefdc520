//! # Pricing Rule Routes
//!
//! CRUD over the shared rule registry plus reset-to-defaults.
//!
//! Edits reach carts opened afterwards only. Open carts keep the rules they
//! were created with.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use checkout_core::{PricingRule, SpecialOffer, ValidationError};
use checkout_store::StoreError;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Bundle offer as sent by clients.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOfferDto {
    pub quantity: i64,
    pub special_price: i64,
}

/// Body for `POST /api/pricingrules`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    pub item_code: String,
    pub unit_price: i64,
    #[serde(default)]
    pub special_offer: Option<SpecialOfferDto>,
}

/// Body for `PUT /api/pricingrules/{item_code}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleRequest {
    pub unit_price: i64,
    #[serde(default)]
    pub special_offer: Option<SpecialOfferDto>,
}

/// Plain acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn to_offer(dto: Option<SpecialOfferDto>) -> Result<Option<SpecialOffer>, ValidationError> {
    dto.map(|o| SpecialOffer::new(o.quantity, o.special_price))
        .transpose()
}

// =============================================================================
// Handlers
// =============================================================================

/// Lists all rules, ordered by item code.
pub async fn list_rules(State(state): State<Arc<AppState>>) -> Json<Vec<PricingRule>> {
    Json(state.store.rules().get_all())
}

/// Fetches one rule.
pub async fn get_rule(
    State(state): State<Arc<AppState>>,
    Path(item_code): Path<String>,
) -> Result<Json<PricingRule>, ApiError> {
    state
        .store
        .rules()
        .get(&item_code)
        .map(Json)
        .ok_or_else(|| StoreError::not_found("Rule", item_code).into())
}

/// Adds a rule. Responds 201 with a `Location` pointing at the new rule.
pub async fn create_rule(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRuleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let offer = to_offer(req.special_offer)?;
    let rule = state
        .store
        .rules()
        .create(&req.item_code, req.unit_price, offer)?;

    let location = format!("/api/pricingrules/{}", rule.item_code());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(rule),
    ))
}

/// Replaces an existing rule. Never creates one.
pub async fn update_rule(
    State(state): State<Arc<AppState>>,
    Path(item_code): Path<String>,
    Json(req): Json<UpdateRuleRequest>,
) -> Result<Json<PricingRule>, ApiError> {
    let offer = to_offer(req.special_offer)?;
    state
        .store
        .rules()
        .update(&item_code, req.unit_price, offer)?
        .map(Json)
        .ok_or_else(|| StoreError::not_found("Rule", item_code).into())
}

/// Removes a rule. Open carts keep pricing it.
pub async fn delete_rule(
    State(state): State<Arc<AppState>>,
    Path(item_code): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.rules().delete(&item_code) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StoreError::not_found("Rule", item_code).into())
    }
}

/// Restores the A/B/C/D catalog.
pub async fn reset_rules(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.store.rules().reset_to_defaults();
    Json(MessageResponse {
        message: "Pricing rules reset to defaults".to_string(),
    })
}
