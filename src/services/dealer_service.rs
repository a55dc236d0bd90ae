//! Domain service for dealership lookups.

use crate::domain::DealerId;
use crate::models::Dealer;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealerError {
    #[error("Dealer not found: {0}")]
    NotFound(DealerId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for DealerError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for DealerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait DealerService: Send + Sync {
    /// Every dealer, ordered by id.
    async fn list_dealers(&self) -> Result<Vec<Dealer>, DealerError>;

    /// Dealers whose `state` matches exactly. An unknown state yields an
    /// empty list.
    async fn list_dealers_by_state(&self, state: &str) -> Result<Vec<Dealer>, DealerError>;

    async fn get_dealer(&self, id: DealerId) -> Result<Dealer, DealerError>;
}
