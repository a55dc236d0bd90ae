//! Car inventory endpoints.
//!
//! All lookups are scoped to a dealer id taken from the path. Filters that
//! match nothing answer `[]`.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::error::ApiResultExt;
use super::validation::{parse_dealer_id, parse_year, validate_path_value};
use super::{ApiError, AppState};
use crate::models::Car;

type CarsResult = Result<Json<Vec<Car>>, ApiError>;

pub async fn cars_for_dealer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> CarsResult {
    let dealer = parse_dealer_id(&id)?;
    let cars = state
        .inventory_service()
        .cars_for_dealer(dealer)
        .await
        .or_report("Error fetching cars")?;
    Ok(Json(cars))
}

pub async fn cars_by_make(
    State(state): State<Arc<AppState>>,
    Path((id, make)): Path<(String, String)>,
) -> CarsResult {
    let dealer = parse_dealer_id(&id)?;
    let make = validate_path_value("make", &make)?;
    let cars = state
        .inventory_service()
        .cars_by_make(dealer, make)
        .await
        .or_report("Error fetching cars by make")?;
    Ok(Json(cars))
}

pub async fn cars_by_model(
    State(state): State<Arc<AppState>>,
    Path((id, model)): Path<(String, String)>,
) -> CarsResult {
    let dealer = parse_dealer_id(&id)?;
    let model = validate_path_value("model", &model)?;
    let cars = state
        .inventory_service()
        .cars_by_model(dealer, model)
        .await
        .or_report("Error fetching cars by model")?;
    Ok(Json(cars))
}

pub async fn cars_by_max_mileage(
    State(state): State<Arc<AppState>>,
    Path((id, mileage)): Path<(String, String)>,
) -> CarsResult {
    let dealer = parse_dealer_id(&id)?;
    let cars = state
        .inventory_service()
        .cars_by_max_mileage(dealer, &mileage)
        .await
        .or_report("Error fetching cars by mileage")?;
    Ok(Json(cars))
}

pub async fn cars_by_price(
    State(state): State<Arc<AppState>>,
    Path((id, price)): Path<(String, String)>,
) -> CarsResult {
    let dealer = parse_dealer_id(&id)?;
    let cars = state
        .inventory_service()
        .cars_by_price(dealer, &price)
        .await
        .or_report("Error fetching cars by price")?;
    Ok(Json(cars))
}

pub async fn cars_by_year(
    State(state): State<Arc<AppState>>,
    Path((id, year)): Path<(String, String)>,
) -> CarsResult {
    let dealer = parse_dealer_id(&id)?;
    let year = parse_year(&year)?;
    let cars = state
        .inventory_service()
        .cars_by_min_year(dealer, year)
        .await
        .or_report("Error fetching cars by year")?;
    Ok(Json(cars))
}
