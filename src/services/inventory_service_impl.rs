//! `SeaORM` implementation of the `InventoryService` trait.

use crate::db::Store;
use crate::domain::{CarFilter, DealerId, InventoryQuery, RangeClassifier};
use crate::models::Car;
use crate::services::inventory_service::{InventoryError, InventoryService};
use async_trait::async_trait;
use tracing::debug;

pub struct SeaOrmInventoryService {
    store: Store,
}

impl SeaOrmInventoryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn find(&self, dealer: DealerId, filter: CarFilter) -> Result<Vec<Car>, InventoryError> {
        self.search(&InventoryQuery::new(dealer, filter)).await
    }
}

#[async_trait]
impl InventoryService for SeaOrmInventoryService {
    async fn cars_for_dealer(&self, dealer: DealerId) -> Result<Vec<Car>, InventoryError> {
        self.find(dealer, CarFilter::All).await
    }

    async fn cars_by_make(&self, dealer: DealerId, make: &str) -> Result<Vec<Car>, InventoryError> {
        self.find(dealer, CarFilter::Make(make.to_string())).await
    }

    async fn cars_by_model(
        &self,
        dealer: DealerId,
        model: &str,
    ) -> Result<Vec<Car>, InventoryError> {
        self.find(dealer, CarFilter::Model(model.to_string())).await
    }

    async fn cars_by_max_mileage(
        &self,
        dealer: DealerId,
        mileage: &str,
    ) -> Result<Vec<Car>, InventoryError> {
        let bucket = RangeClassifier::MILEAGE.parse_sentinel(mileage);
        self.find(dealer, CarFilter::Mileage(bucket)).await
    }

    async fn cars_by_price(
        &self,
        dealer: DealerId,
        price: &str,
    ) -> Result<Vec<Car>, InventoryError> {
        let bucket = RangeClassifier::PRICE.parse_sentinel(price);
        self.find(dealer, CarFilter::Price(bucket)).await
    }

    async fn cars_by_min_year(
        &self,
        dealer: DealerId,
        year: i32,
    ) -> Result<Vec<Car>, InventoryError> {
        self.find(dealer, CarFilter::MinYear(year)).await
    }

    async fn search(&self, query: &InventoryQuery) -> Result<Vec<Car>, InventoryError> {
        let cars = self
            .store
            .find_cars(query.dealer_id.value(), &query.filter)
            .await?;

        debug!(
            dealer_id = %query.dealer_id,
            filter = query.filter.name(),
            count = cars.len(),
            "Inventory search"
        );

        Ok(cars)
    }
}
