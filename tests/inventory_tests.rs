//! Car inventory endpoints, including the bucketed mileage and price filters.

mod common;

use axum::http::StatusCode;
use common::{get, sorted_field, spawn_app};
use dealership::domain::RangeClassifier;
use serde_json::json;

const DEALER_ONE_MILEAGES: [i64; 9] = [
    10_000, 50_000, 50_001, 100_000, 100_001, 150_000, 150_001, 200_000, 200_001,
];

const DEALER_ONE_PRICES: [i64; 9] = [
    15_000, 20_000, 20_001, 40_000, 40_001, 60_000, 60_001, 80_000, 80_001,
];

#[tokio::test]
async fn test_cars_for_dealer_are_scoped() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/cars/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted_field(&body, "mileage"), DEALER_ONE_MILEAGES.to_vec());
    assert!(body.as_array().unwrap().iter().all(|car| car["dealer_id"] == 1));

    let (_, body) = get(&app.router, "/cars/2").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get(&app.router, "/cars/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_mileage_buckets_are_half_open() {
    let app = spawn_app().await;
    let classifier = RangeClassifier::MILEAGE;

    let cases: [(&str, Vec<i64>); 6] = [
        ("50000", vec![10_000, 50_000]),
        ("100000", vec![50_001, 100_000]),
        ("150000", vec![100_001, 150_000]),
        ("200000", vec![150_001, 200_000]),
        ("250000", vec![200_001]),
        ("lots", vec![200_001]),
    ];

    for (sentinel, expected) in cases {
        let (status, body) = get(&app.router, &format!("/carsbymaxmileage/1/{sentinel}")).await;
        assert_eq!(status, StatusCode::OK, "sentinel {sentinel}");
        assert_eq!(sorted_field(&body, "mileage"), expected, "sentinel {sentinel}");

        let bucket = classifier.parse_sentinel(sentinel);
        let from_classifier: Vec<i64> = DEALER_ONE_MILEAGES
            .iter()
            .copied()
            .filter(|m| bucket.contains(*m))
            .collect();
        assert_eq!(from_classifier, expected, "classifier for {sentinel}");
    }
}

#[tokio::test]
async fn test_price_buckets_use_price_thresholds() {
    let app = spawn_app().await;

    let cases: [(&str, Vec<i64>); 5] = [
        ("20000", vec![15_000, 20_000]),
        ("40000", vec![20_001, 40_000]),
        ("60000", vec![40_001, 60_000]),
        ("80000", vec![60_001, 80_000]),
        ("75000", vec![80_001]),
    ];

    for (sentinel, expected) in cases {
        let (status, body) = get(&app.router, &format!("/carsbyprice/1/{sentinel}")).await;
        assert_eq!(status, StatusCode::OK, "sentinel {sentinel}");
        assert_eq!(sorted_field(&body, "price"), expected, "sentinel {sentinel}");
    }

    // Every dealer 1 car falls in exactly one price bucket.
    let mut total = 0;
    for sentinel in ["20000", "40000", "60000", "80000", "overflow"] {
        let (_, body) = get(&app.router, &format!("/carsbyprice/1/{sentinel}")).await;
        total += body.as_array().unwrap().len();
    }
    assert_eq!(total, DEALER_ONE_PRICES.len());
}

#[tokio::test]
async fn test_make_and_model_exact_match() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/carsbymake/1/Audi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
    assert!(body.as_array().unwrap().iter().all(|car| car["make"] == "Audi"));

    let (status, body) = get(&app.router, "/carsbymake/1/Ferrari").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get(&app.router, "/carsbymodel/1/Camry").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (_, body) = get(&app.router, "/carsbymodel/1/camry").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_cars_by_minimum_year() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/carsbyyear/1/2021").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sorted_field(&body, "year"), vec![2021, 2022, 2023]);

    let (status, body) = get(&app.router, "/carsbyyear/1/recent").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("recent"));
}

#[tokio::test]
async fn test_invalid_dealer_id_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/cars/first").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
