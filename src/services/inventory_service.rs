//! Domain service for dealer car inventory.
//!
//! Every lookup is scoped to one dealer. Unknown dealers, makes or models
//! produce empty lists rather than errors.

use crate::domain::inventory_query::QueryError;
use crate::domain::{DealerId, InventoryQuery};
use crate::models::Car;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("{0}")]
    InvalidQuery(#[from] QueryError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for InventoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for InventoryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait InventoryService: Send + Sync {
    async fn cars_for_dealer(&self, dealer: DealerId) -> Result<Vec<Car>, InventoryError>;

    async fn cars_by_make(&self, dealer: DealerId, make: &str) -> Result<Vec<Car>, InventoryError>;

    async fn cars_by_model(
        &self,
        dealer: DealerId,
        model: &str,
    ) -> Result<Vec<Car>, InventoryError>;

    /// `mileage` is a bucket sentinel; anything but a tier ceiling selects
    /// the overflow bucket.
    async fn cars_by_max_mileage(
        &self,
        dealer: DealerId,
        mileage: &str,
    ) -> Result<Vec<Car>, InventoryError>;

    /// Same sentinel rules as [`Self::cars_by_max_mileage`] with the price tiers.
    async fn cars_by_price(
        &self,
        dealer: DealerId,
        price: &str,
    ) -> Result<Vec<Car>, InventoryError>;

    /// Cars whose year is greater than or equal to `year`.
    async fn cars_by_min_year(
        &self,
        dealer: DealerId,
        year: i32,
    ) -> Result<Vec<Car>, InventoryError>;

    async fn search(&self, query: &InventoryQuery) -> Result<Vec<Car>, InventoryError>;
}
