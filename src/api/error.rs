use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::services::{CatalogError, DealerError, InventoryError, ReviewError};

const GENERIC_DATABASE_MESSAGE: &str = "A database error occurred";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    ValidationError(String),

    /// Storage failure. `detail` is logged; only `message` reaches the client.
    DatabaseError {
        detail: String,
        message: &'static str,
    },

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::DatabaseError { detail, .. } => write!(f, "Database error: {detail}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn database(detail: impl Into<String>) -> Self {
        Self::DatabaseError {
            detail: detail.into(),
            message: GENERIC_DATABASE_MESSAGE,
        }
    }

    /// Replaces the client-facing message of a storage failure. Other
    /// variants are returned unchanged.
    #[must_use]
    pub fn with_message(self, message: &'static str) -> Self {
        match self {
            Self::DatabaseError { detail, .. } => Self::DatabaseError { detail, message },
            other => other,
        }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError { .. } | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to the client. Server-side failures are logged here
    /// and replaced by a generic message.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::ValidationError(msg) => msg.clone(),
            Self::DatabaseError { detail, message } => {
                tracing::error!("Database error: {}", detail);
                (*message).to_string()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody::new(self.public_message());
        (status, Json(body)).into_response()
    }
}

/// Attaches a per-route client message to storage failures.
pub trait ApiResultExt<T> {
    fn or_report(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T, E: Into<ApiError>> ApiResultExt<T> for Result<T, E> {
    fn or_report(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| e.into().with_message(message))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(format!("Invalid JSON format: {}", rejection.body_text()))
    }
}

impl From<DealerError> for ApiError {
    fn from(err: DealerError) -> Self {
        match err {
            DealerError::NotFound(_) => Self::not_found("Dealer not found"),
            DealerError::Database(msg) => Self::database(msg),
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::Validation(msg) => Self::validation(msg),
            ReviewError::Database(msg) => Self::database(msg),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::InvalidQuery(e) => Self::validation(e.to_string()),
            InventoryError::Database(msg) => Self::database(msg),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => Self::validation(msg),
            CatalogError::Database(msg) => Self::database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DealerId;

    #[test]
    fn service_errors_map_to_status_codes() {
        let not_found = ApiError::from(DealerError::NotFound(DealerId::new(99)));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.public_message(), "Dealer not found");

        let invalid = ApiError::from(ReviewError::Validation("Missing".to_string()));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let storage = ApiError::from(InventoryError::Database("disk I/O error".to_string()));
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_detail_is_hidden_from_clients() {
        let result: Result<(), ReviewError> =
            Err(ReviewError::Database("no such table: reviews".to_string()));
        let err = result.or_report("Error fetching reviews").unwrap_err();

        assert_eq!(err.public_message(), "Error fetching reviews");
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn report_message_leaves_client_errors_untouched() {
        let result: Result<(), DealerError> = Err(DealerError::NotFound(DealerId::new(1)));
        let err = result.or_report("Error fetching dealer details").unwrap_err();
        assert_eq!(err.public_message(), "Dealer not found");
    }
}
