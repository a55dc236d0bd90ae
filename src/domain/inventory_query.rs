//! Routing of inventory search parameters to a single car filter.
//!
//! The dealer inventory page sends at most one meaningful filter at a time.
//! When several are present the precedence is `year`, `make`, `model`,
//! `mileage`, `price`; with none the whole dealer inventory is returned.

use std::collections::HashMap;

use super::DealerId;
use super::range::{Bucket, RangeClassifier};
use crate::models::Car;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarFilter {
    All,
    Make(String),
    Model(String),
    /// Year greater than or equal to the value.
    MinYear(i32),
    Mileage(Bucket),
    Price(Bucket),
}

impl CarFilter {
    #[must_use]
    pub fn matches(&self, car: &Car) -> bool {
        match self {
            Self::All => true,
            Self::Make(make) => car.make == *make,
            Self::Model(model) => car.model == *model,
            Self::MinYear(year) => car.year >= *year,
            Self::Mileage(bucket) => bucket.contains(car.mileage),
            Self::Price(bucket) => bucket.contains(car.price),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Make(_) => "make",
            Self::Model(_) => "model",
            Self::MinYear(_) => "year",
            Self::Mileage(_) => "mileage",
            Self::Price(_) => "price",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid year: {0}. Year must be an integer")]
    InvalidYear(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryQuery {
    pub dealer_id: DealerId,
    pub filter: CarFilter,
}

impl InventoryQuery {
    #[must_use]
    pub const fn new(dealer_id: DealerId, filter: CarFilter) -> Self {
        Self { dealer_id, filter }
    }

    pub fn from_params(
        dealer_id: DealerId,
        params: &HashMap<String, String>,
    ) -> Result<Self, QueryError> {
        let filter = if let Some(year) = param(params, "year") {
            CarFilter::MinYear(parse_year(year)?)
        } else if let Some(make) = param(params, "make") {
            CarFilter::Make(make.to_string())
        } else if let Some(model) = param(params, "model") {
            CarFilter::Model(model.to_string())
        } else if let Some(mileage) = param(params, "mileage") {
            CarFilter::Mileage(RangeClassifier::MILEAGE.parse_sentinel(mileage))
        } else if let Some(price) = param(params, "price") {
            CarFilter::Price(RangeClassifier::PRICE.parse_sentinel(price))
        } else {
            CarFilter::All
        };

        Ok(Self::new(dealer_id, filter))
    }
}

pub fn parse_year(raw: &str) -> Result<i32, QueryError> {
    raw.trim()
        .parse()
        .map_err(|_| QueryError::InvalidYear(raw.to_string()))
}

/// A parameter counts as absent when it is empty or the literal `all`.
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}
