//! The `/djangoapp` envelope surface.

mod common;

use axum::http::StatusCode;
use common::{get, post_json, spawn_app, test_config, test_dir, write_fixtures};
use dealership::domain::Sentiment;
use dealership::services::FixedSentimentAnalyzer;
use dealership::state::SharedState;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_dealers_envelope() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/djangoapp/api/dealers/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["dealers"].as_array().unwrap().len(), 3);

    let (_, body) = get(&app.router, "/djangoapp/api/dealers/All/").await;
    assert_eq!(body["dealers"].as_array().unwrap().len(), 3);

    let (_, body) = get(&app.router, "/djangoapp/api/dealers/Minnesota").await;
    assert_eq!(body["dealers"].as_array().unwrap().len(), 1);
    assert_eq!(body["dealers"][0]["short_name"], "Temp");
}

#[tokio::test]
async fn test_dealer_details_envelope() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/djangoapp/api/dealer/1/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["dealer"]["city"], "El Paso");

    let (status, body) = get(&app.router, "/djangoapp/api/dealer/404/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"status": 404, "error": "Dealer not found"}));
}

#[tokio::test]
async fn test_reviews_are_annotated_with_sentiment() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/djangoapp/api/reviews/dealer/15/").await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r["sentiment"] == "neutral"));
    assert_eq!(reviews[0]["name"], "Berkly Shepley");
}

#[tokio::test]
async fn test_injected_analyzer_drives_sentiment() {
    let dir = test_dir("dealership-gateway");
    let paths = write_fixtures(
        &dir,
        &common::dealers_fixture(),
        &common::reviews_fixture(),
        &common::cars_fixture(),
    );
    let config = test_config(&dir, &paths);

    let shared = SharedState::with_analyzer(
        config,
        Arc::new(FixedSentimentAnalyzer(Sentiment::Positive)),
    )
    .await
    .unwrap();
    shared.seed().await.unwrap();

    let state = dealership::api::create_app_state(Arc::new(shared), None);
    let router = dealership::api::router(state).await;

    let (_, body) = get(&router, "/djangoapp/api/reviews/dealer/15").await;
    let reviews = body["reviews"].as_array().unwrap();
    assert!(!reviews.is_empty());
    assert!(reviews.iter().all(|r| r["sentiment"] == "positive"));
}

#[tokio::test]
async fn test_add_review_envelope() {
    let app = spawn_app().await;

    let payload = json!({
        "name": "Nani Wyld",
        "dealership": 2,
        "review": "Quality-focused executive migration",
        "purchase": true,
        "purchase_date": "06/23/2020",
        "car_make": "NISSAN",
        "car_model": "Qashqai",
        "car_year": 2019
    });
    let (status, body) =
        post_json(&app.router, "/djangoapp/api/add_review/", &payload.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": 200, "message": "Review posted successfully"})
    );

    let (status, body) = post_json(&app.router, "/djangoapp/api/add_review", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["message"].as_str().unwrap().contains("name"));

    let (status, body) = post_json(&app.router, "/djangoapp/api/add_review/", "oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"status": 400, "message": "Invalid JSON format"}));

    let (_, body) = get(&app.router, "/fetchReviews/dealer/2").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_cars_populates_catalog_once() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/djangoapp/api/get_cars/").await;
    assert_eq!(status, StatusCode::OK);
    let models = body["CarModels"].as_array().unwrap();
    assert_eq!(models.len(), 15);
    assert_eq!(models[0], json!({"CarModel": "A4", "CarMake": "Audi"}));

    let (_, again) = get(&app.router, "/djangoapp/api/get_cars").await;
    assert_eq!(again, body);
}

#[tokio::test]
async fn test_inventory_query_routing() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/djangoapp/get_inventory/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["cars"].as_array().unwrap().len(), 9);

    // year wins over make
    let (_, body) = get(&app.router, "/djangoapp/get_inventory/1?make=Toyota&year=2022").await;
    let years: Vec<i64> = body["cars"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![2022, 2023]);

    // `all` means no make filter, so model applies
    let (_, body) = get(&app.router, "/djangoapp/get_inventory/1?make=all&model=Camry").await;
    assert_eq!(body["cars"].as_array().unwrap().len(), 4);

    let (_, body) = get(&app.router, "/djangoapp/get_inventory/1/?mileage=100000").await;
    assert_eq!(body["cars"].as_array().unwrap().len(), 2);

    let (status, body) = get(&app.router, "/djangoapp/get_inventory/1?year=soon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["message"].as_str().unwrap().contains("soon"));
}
