//! `SeaORM` implementation of the `DealerService` trait.

use crate::db::Store;
use crate::domain::DealerId;
use crate::models::Dealer;
use crate::services::dealer_service::{DealerError, DealerService};
use async_trait::async_trait;
use tracing::debug;

pub struct SeaOrmDealerService {
    store: Store,
}

impl SeaOrmDealerService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DealerService for SeaOrmDealerService {
    async fn list_dealers(&self) -> Result<Vec<Dealer>, DealerError> {
        Ok(self.store.list_dealers().await?)
    }

    async fn list_dealers_by_state(&self, state: &str) -> Result<Vec<Dealer>, DealerError> {
        let dealers = self.store.list_dealers_by_state(state).await?;
        debug!(state, count = dealers.len(), "Fetched dealers by state");
        Ok(dealers)
    }

    async fn get_dealer(&self, id: DealerId) -> Result<Dealer, DealerError> {
        self.store
            .get_dealer(id.value())
            .await?
            .ok_or(DealerError::NotFound(id))
    }
}
