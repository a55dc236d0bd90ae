//! Dealership endpoints of the reviews backend.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;
use tracing::info;

use super::error::ApiResultExt;
use super::validation::parse_dealer_id;
use super::{ApiError, AppState};
use crate::models::Dealer;

/// `GET /fetchDealers`
pub async fn fetch_dealers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Dealer>>, ApiError> {
    let dealers = state
        .dealer_service()
        .list_dealers()
        .await
        .or_report("Error fetching dealerships")?;
    Ok(Json(dealers))
}

/// `GET /fetchDealers/{state}`. An unknown state yields `[]`.
pub async fn fetch_dealers_by_state(
    State(state): State<Arc<AppState>>,
    Path(us_state): Path<String>,
) -> Result<Json<Vec<Dealer>>, ApiError> {
    info!("Fetching dealerships for state: {}", us_state);
    let dealers = state
        .dealer_service()
        .list_dealers_by_state(&us_state)
        .await
        .or_report("Error fetching dealerships by state")?;
    Ok(Json(dealers))
}

/// `GET /fetchDealer/{id}`
pub async fn fetch_dealer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Dealer>, ApiError> {
    let id = parse_dealer_id(&id)?;
    let dealer = state
        .dealer_service()
        .get_dealer(id)
        .await
        .or_report("Error fetching dealer details")?;
    Ok(Json(dealer))
}
