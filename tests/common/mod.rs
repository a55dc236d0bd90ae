//! Shared helpers for the integration tests: a throwaway SQLite file, fixture
//! files written per test, and request helpers around `oneshot`.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use dealership::api::AppState;
use dealership::config::Config;
use dealership::db::FixturePaths;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub state: Arc<AppState>,
    pub router: Router,
    pub dir: PathBuf,
}

pub fn test_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{prefix}-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("failed to create test dir");
    dir
}

pub fn dealers_fixture() -> Value {
    json!({
        "dealerships": [
            {"id": 1, "city": "El Paso", "state": "Texas", "address": "3 Nova Court",
             "zip": "88563", "lat": 31.69, "long": -106.3, "short_name": "Holdlamis",
             "full_name": "Holdlamis Car Dealership"},
            {"id": 2, "city": "Minneapolis", "state": "Minnesota",
             "address": "6337 Butternut Crossing", "zip": "55402", "short_name": "Temp",
             "full_name": "Temp Car Dealership"},
            {"id": "15", "city": "Dallas", "state": "Texas", "address": "85800 Hazelcrest Circle",
             "zip": "75241", "short_name": "Solarbreeze", "full_name": "Solarbreeze Car Dealership"}
        ]
    })
}

pub fn reviews_fixture() -> Value {
    json!({
        "reviews": [
            {"id": 1, "name": "Berkly Shepley", "dealership": 15,
             "review": "Total grid-enabled service-desk", "purchase": true,
             "purchase_date": "07/11/2020", "car_make": "Audi", "car_model": "A6", "car_year": 2010},
            {"id": 2, "name": "Gwenora Zettoi", "dealership": "2",
             "review": "Future-proofed foreground capability", "purchase": false},
            {"id": 7, "name": "Clea Beamond", "dealership": 15,
             "review": "Great selection", "purchase": "true",
             "purchase_date": "01/02/2021", "car_make": "Kia", "car_model": "Sorento", "car_year": "2020"}
        ]
    })
}

/// Dealer 1 carries one car on each side of every mileage and price
/// boundary; dealer 2 carries a single car that must never leak into
/// dealer 1 results.
pub fn cars_fixture() -> Value {
    let boundaries = [
        (10_000, 15_000, 2015),
        (50_000, 20_000, 2016),
        (50_001, 20_001, 2017),
        (100_000, 40_000, 2018),
        (100_001, 40_001, 2019),
        (150_000, 60_000, 2020),
        (150_001, 60_001, 2021),
        (200_000, 80_000, 2022),
        (200_001, 80_001, 2023),
    ];

    let mut cars: Vec<Value> = boundaries
        .iter()
        .enumerate()
        .map(|(i, (mileage, price, year))| {
            let (make, model) = if i % 2 == 0 {
                ("Audi", "A4")
            } else {
                ("Toyota", "Camry")
            };
            json!({
                "make": make, "model": model, "bodyType": "SUV", "year": year,
                "dealer_id": 1, "mileage": mileage, "price": price
            })
        })
        .collect();

    cars.push(json!({
        "make": "Audi", "model": "A4", "bodyType": "SUV", "year": 2023,
        "dealer_id": 2, "mileage": 10_000, "price": 15_000
    }));

    json!({ "cars": cars })
}

pub fn write_fixtures(dir: &std::path::Path, dealers: &Value, reviews: &Value, cars: &Value) -> FixturePaths {
    let paths = FixturePaths {
        dealerships: dir.join("dealerships.json"),
        reviews: dir.join("reviews.json"),
        cars: dir.join("car_records.json"),
    };
    std::fs::write(&paths.dealerships, dealers.to_string()).unwrap();
    std::fs::write(&paths.reviews, reviews.to_string()).unwrap();
    std::fs::write(&paths.cars, cars.to_string()).unwrap();
    paths
}

pub fn test_config(dir: &std::path::Path, paths: &FixturePaths) -> Config {
    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", dir.join("dealership.db").display());
    config.fixtures.dealerships_path = paths.dealerships.display().to_string();
    config.fixtures.reviews_path = paths.reviews.display().to_string();
    config.fixtures.cars_path = paths.cars.display().to_string();
    config.fixtures.seed_on_startup = true;
    config.observability.metrics_enabled = false;
    config
}

pub async fn spawn_app() -> TestApp {
    let dir = test_dir("dealership-test");
    let paths = write_fixtures(&dir, &dealers_fixture(), &reviews_fixture(), &cars_fixture());
    let config = test_config(&dir, &paths);

    let state = dealership::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");
    let router = dealership::api::router(state.clone()).await;

    TestApp { state, router, dir }
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub async fn get_text(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).to_string())
}

pub async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

/// Values of `field` across a JSON array, sorted.
pub fn sorted_field(body: &Value, field: &str) -> Vec<i64> {
    let mut values: Vec<i64> = body
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item[field].as_i64().expect("expected an integer field"))
        .collect();
    values.sort_unstable();
    values
}
