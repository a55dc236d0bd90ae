//! Response bodies.
//!
//! The reviews/dealers and inventory routes answer with bare JSON values and
//! `{"error": ...}` on failure. The `/djangoapp` gateway wraps everything in
//! an envelope carrying the HTTP status.

use serde::Serialize;

use crate::models::{Car, CarCatalogEntry, Dealer, ReviewWithSentiment};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusError {
    pub status: u16,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DealersEnvelope {
    pub status: u16,
    pub dealers: Vec<Dealer>,
}

#[derive(Debug, Serialize)]
pub struct DealerEnvelope {
    pub status: u16,
    pub dealer: Dealer,
}

#[derive(Debug, Serialize)]
pub struct ReviewsEnvelope {
    pub status: u16,
    pub reviews: Vec<ReviewWithSentiment>,
}

#[derive(Debug, Serialize)]
pub struct CarsEnvelope {
    pub status: u16,
    pub cars: Vec<Car>,
}

#[derive(Debug, Serialize)]
pub struct CarModelsResponse {
    #[serde(rename = "CarModels")]
    pub car_models: Vec<CarCatalogEntry>,
}
