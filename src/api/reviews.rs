//! Review endpoints of the reviews backend.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use std::sync::Arc;
use tracing::info;

use super::error::ApiResultExt;
use super::validation::parse_dealer_id;
use super::{ApiError, AppState};
use crate::models::{NewReview, Review};

pub async fn fetch_reviews(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state
        .review_service()
        .list_reviews()
        .await
        .or_report("Error fetching reviews")?;
    Ok(Json(reviews))
}

pub async fn fetch_reviews_for_dealer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let id = parse_dealer_id(&id)?;
    let reviews = state
        .review_service()
        .reviews_for_dealer(id)
        .await
        .or_report("Error fetching reviews")?;
    Ok(Json(reviews))
}

/// `POST /insert_review`
///
/// Responds with the stored review, including its assigned id. A body that
/// is not JSON or lacks `name`, `dealership` or `review` is rejected with
/// 400 and nothing is written.
pub async fn insert_review(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewReview>, JsonRejection>,
) -> Result<Json<Review>, ApiError> {
    let Json(payload) = payload?;
    let review = state
        .review_service()
        .insert_review(payload)
        .await
        .or_report("Error inserting review")?;

    info!(id = review.id, dealership = review.dealership, "Review inserted");
    Ok(Json(review))
}
