//! `SeaORM` implementation of the `ReviewService` trait.

use crate::db::Store;
use crate::domain::DealerId;
use crate::models::{NewReview, Review};
use crate::services::review_service::{ReviewError, ReviewService, validate_new_review};
use async_trait::async_trait;

pub struct SeaOrmReviewService {
    store: Store,
}

impl SeaOrmReviewService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewService for SeaOrmReviewService {
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError> {
        Ok(self.store.list_reviews().await?)
    }

    async fn reviews_for_dealer(&self, dealer: DealerId) -> Result<Vec<Review>, ReviewError> {
        Ok(self.store.list_reviews_for_dealer(dealer.value()).await?)
    }

    async fn insert_review(&self, payload: NewReview) -> Result<Review, ReviewError> {
        validate_new_review(&payload)?;
        Ok(self.store.insert_review(payload).await?)
    }
}
