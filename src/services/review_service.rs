//! Domain service for dealership reviews.
//!
//! Reviews are append-only: they can be listed and inserted, never updated
//! or removed. Ids are assigned by storage when the row is written.

use crate::domain::DealerId;
use crate::models::{NewReview, Review};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ReviewError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ReviewError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Rejects a submission that lacks a reviewer name, dealership or text.
pub fn validate_new_review(payload: &NewReview) -> Result<(), ReviewError> {
    let missing = payload.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReviewError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

#[async_trait::async_trait]
pub trait ReviewService: Send + Sync {
    async fn list_reviews(&self) -> Result<Vec<Review>, ReviewError>;

    /// Reviews referencing `dealer`. The dealer does not have to exist.
    async fn reviews_for_dealer(&self, dealer: DealerId) -> Result<Vec<Review>, ReviewError>;

    /// Validates and stores a review, returning it with its assigned id.
    ///
    /// Nothing is written when validation fails.
    async fn insert_review(&self, payload: NewReview) -> Result<Review, ReviewError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_lists_every_missing_field() {
        let err = validate_new_review(&NewReview::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Missing required fields: name, dealership, review"
        );
    }

    #[test]
    fn validation_accepts_minimal_payload() {
        let payload = NewReview {
            name: Some("Lion Cheyney".to_string()),
            dealership: Some(15),
            review: Some("Fantastic service".to_string()),
            ..NewReview::default()
        };
        assert!(validate_new_review(&payload).is_ok());
    }
}
