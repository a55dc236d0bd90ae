//! The `/djangoapp` surface consumed by the front-end.
//!
//! Same data as the backend routes, wrapped in `{"status": <code>, ...}`
//! envelopes. Handlers call the services in process.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::error::ApiResultExt;
use super::validation::parse_dealer_id;
use super::{
    ApiError, AppState, CarModelsResponse, CarsEnvelope, DealerEnvelope, DealersEnvelope,
    ReviewsEnvelope, StatusError, StatusMessage, with_trailing_slash,
};
use crate::domain::InventoryQuery;
use crate::models::NewReview;
use crate::services::sentiment::annotate;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvelopeField {
    Error,
    Message,
}

/// An [`ApiError`] rendered inside the gateway envelope.
#[derive(Debug)]
pub struct GatewayError {
    error: ApiError,
    field: EnvelopeField,
}

impl GatewayError {
    /// Reports the failure under `"message"` instead of `"error"`.
    #[must_use]
    pub const fn message(error: ApiError) -> Self {
        Self {
            error,
            field: EnvelopeField::Message,
        }
    }
}

impl From<ApiError> for GatewayError {
    fn from(error: ApiError) -> Self {
        Self {
            error,
            field: EnvelopeField::Error,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let text = self.error.public_message();
        match self.field {
            EnvelopeField::Error => (
                status,
                Json(StatusError {
                    status: status.as_u16(),
                    error: text,
                }),
            )
                .into_response(),
            EnvelopeField::Message => (
                status,
                Json(StatusMessage {
                    status: status.as_u16(),
                    message: text,
                }),
            )
                .into_response(),
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    let routes = [
        ("/api/dealers", get(fetch_dealers)),
        ("/api/dealers/{state}", get(fetch_dealers_by_state)),
        ("/api/dealer/{id}", get(get_dealer_details)),
        ("/api/reviews/dealer/{id}", get(get_dealer_reviews)),
        ("/api/add_review", post(add_review)),
        ("/api/get_cars", get(get_cars)),
        ("/get_inventory/{id}", get(get_inventory)),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            with_trailing_slash(router, path, method_router)
        })
}

async fn fetch_dealers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DealersEnvelope>, GatewayError> {
    let dealers = state
        .dealer_service()
        .list_dealers()
        .await
        .or_report(INTERNAL_SERVER_ERROR)?;

    info!("Retrieved {} dealers", dealers.len());
    Ok(Json(DealersEnvelope {
        status: 200,
        dealers,
    }))
}

/// `All` (any case) lists every dealer.
async fn fetch_dealers_by_state(
    State(state): State<Arc<AppState>>,
    Path(us_state): Path<String>,
) -> Result<Json<DealersEnvelope>, GatewayError> {
    let service = state.dealer_service();
    let result = if us_state.eq_ignore_ascii_case("all") {
        service.list_dealers().await
    } else {
        service.list_dealers_by_state(&us_state).await
    };
    let dealers = result.or_report(INTERNAL_SERVER_ERROR)?;

    Ok(Json(DealersEnvelope {
        status: 200,
        dealers,
    }))
}

async fn get_dealer_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DealerEnvelope>, GatewayError> {
    let id = parse_dealer_id(&id)?;
    let dealer = state
        .dealer_service()
        .get_dealer(id)
        .await
        .or_report(INTERNAL_SERVER_ERROR)?;

    Ok(Json(DealerEnvelope {
        status: 200,
        dealer,
    }))
}

async fn get_dealer_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ReviewsEnvelope>, GatewayError> {
    let id = parse_dealer_id(&id)?;
    let reviews = state
        .review_service()
        .reviews_for_dealer(id)
        .await
        .or_report(INTERNAL_SERVER_ERROR)?;

    let reviews = annotate(state.sentiment().as_ref(), reviews).await;
    info!("Retrieved {} reviews for dealer {}", reviews.len(), id);

    Ok(Json(ReviewsEnvelope {
        status: 200,
        reviews,
    }))
}

async fn add_review(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewReview>, JsonRejection>,
) -> Result<Json<StatusMessage>, GatewayError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Rejected review submission: {}", rejection.body_text());
        GatewayError::message(ApiError::validation("Invalid JSON format"))
    })?;

    let review = state
        .review_service()
        .insert_review(payload)
        .await
        .or_report("Error in posting review")
        .map_err(GatewayError::message)?;

    info!("Review {} posted for dealer {}", review.id, review.dealership);
    Ok(Json(StatusMessage {
        status: 200,
        message: "Review posted successfully".to_string(),
    }))
}

async fn get_cars(State(state): State<Arc<AppState>>) -> Result<Json<CarModelsResponse>, ApiError> {
    let car_models = state
        .catalog_service()
        .list_car_models()
        .await
        .or_report("Failed to retrieve car models")?;

    Ok(Json(CarModelsResponse { car_models }))
}

/// Accepts at most one of `year`, `make`, `model`, `mileage`, `price`; see
/// [`InventoryQuery::from_params`] for precedence when several are given.
async fn get_inventory(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CarsEnvelope>, GatewayError> {
    let dealer = parse_dealer_id(&id).map_err(GatewayError::message)?;
    let query = InventoryQuery::from_params(dealer, &params)
        .map_err(|e| GatewayError::message(ApiError::validation(e.to_string())))?;

    let cars = state
        .inventory_service()
        .search(&query)
        .await
        .or_report(INTERNAL_SERVER_ERROR)
        .map_err(GatewayError::message)?;

    Ok(Json(CarsEnvelope { status: 200, cars }))
}
