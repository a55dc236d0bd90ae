use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{MethodRouter, get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod dealers;
mod error;
pub mod gateway;
mod inventory;
mod observability;
mod reviews;
mod types;
mod validation;

pub use error::{ApiError, ApiResultExt};
pub use types::*;

use tokio::sync::RwLock;

use crate::services::{
    CatalogService, DealerService, InventoryService, ReviewService, SentimentAnalyzer,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn dealer_service(&self) -> &Arc<dyn DealerService> {
        &self.shared.dealer_service
    }

    #[must_use]
    pub fn review_service(&self) -> &Arc<dyn ReviewService> {
        &self.shared.review_service
    }

    #[must_use]
    pub fn inventory_service(&self) -> &Arc<dyn InventoryService> {
        &self.shared.inventory_service
    }

    #[must_use]
    pub fn catalog_service(&self) -> &Arc<dyn CatalogService> {
        &self.shared.catalog_service
    }

    #[must_use]
    pub fn sentiment(&self) -> &Arc<dyn SentimentAnalyzer> {
        &self.shared.sentiment
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        prometheus_handle,
    })
}

/// Bootstraps shared state (seeding when configured) and wraps it for the
/// router.
pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::bootstrap(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

/// Registers `method_router` at `path` and at `path/`.
fn with_trailing_slash(
    router: Router<Arc<AppState>>,
    path: &str,
    method_router: MethodRouter<Arc<AppState>>,
) -> Router<Arc<AppState>> {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().read().await.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(welcome))
        .merge(create_reviews_router())
        .merge(create_inventory_router())
        .nest("/djangoapp", gateway::router())
        .route("/metrics", get(observability::get_metrics))
        .fallback(route_not_found)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_metrics))
}

fn create_reviews_router() -> Router<Arc<AppState>> {
    let routes = [
        ("/fetchReviews", get(reviews::fetch_reviews)),
        (
            "/fetchReviews/dealer/{id}",
            get(reviews::fetch_reviews_for_dealer),
        ),
        ("/fetchDealers", get(dealers::fetch_dealers)),
        ("/fetchDealers/{state}", get(dealers::fetch_dealers_by_state)),
        ("/fetchDealer/{id}", get(dealers::fetch_dealer)),
        ("/insert_review", post(reviews::insert_review)),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            with_trailing_slash(router, path, method_router)
        })
}

fn create_inventory_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cars/{id}", get(inventory::cars_for_dealer))
        .route("/carsbymake/{id}/{make}", get(inventory::cars_by_make))
        .route("/carsbymodel/{id}/{model}", get(inventory::cars_by_model))
        .route(
            "/carsbymaxmileage/{id}/{mileage}",
            get(inventory::cars_by_max_mileage),
        )
        .route("/carsbyprice/{id}/{price}", get(inventory::cars_by_price))
        .route("/carsbyyear/{id}/{year}", get(inventory::cars_by_year))
}

async fn welcome() -> &'static str {
    "Welcome to the Dealership API"
}

async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Route not found")))
}
