//! Domain service for the car make/model catalog.
//!
//! The catalog is a small built-in list of makes and their models. It is
//! written lazily: the first listing on an empty catalog populates it.

use crate::models::{CarCatalogEntry, CarType};
use serde::Serialize;
use thiserror::Error;

/// Earliest model year the catalog accepts.
pub const MIN_MODEL_YEAR: i32 = 1980;

#[derive(Debug, Clone, Copy)]
pub struct CatalogMake {
    pub name: &'static str,
    pub description: &'static str,
    pub models: &'static [CatalogModel],
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogModel {
    pub name: &'static str,
    pub car_type: CarType,
    pub year: i32,
}

const fn model(name: &'static str, car_type: CarType) -> CatalogModel {
    CatalogModel {
        name,
        car_type,
        year: 2023,
    }
}

pub const BUILTIN_CATALOG: &[CatalogMake] = &[
    CatalogMake {
        name: "NISSAN",
        description: "Innovative Japanese engineering",
        models: &[
            model("Pathfinder", CarType::Suv),
            model("Qashqai", CarType::Suv),
            model("XTRAIL", CarType::Suv),
        ],
    },
    CatalogMake {
        name: "Mercedes",
        description: "Premium German craftsmanship",
        models: &[
            model("A-Class", CarType::Suv),
            model("C-Class", CarType::Suv),
            model("E-Class", CarType::Suv),
        ],
    },
    CatalogMake {
        name: "Audi",
        description: "Precision German technology",
        models: &[
            model("A4", CarType::Suv),
            model("A5", CarType::Suv),
            model("A6", CarType::Suv),
        ],
    },
    CatalogMake {
        name: "Kia",
        description: "Advanced Korean engineering",
        models: &[
            model("Sorento", CarType::Suv),
            model("Carnival", CarType::Suv),
            model("Cerato", CarType::Sedan),
        ],
    },
    CatalogMake {
        name: "Toyota",
        description: "Reliability of Japanese manufacturing",
        models: &[
            model("Corolla", CarType::Sedan),
            model("Camry", CarType::Sedan),
            model("Kluger", CarType::Suv),
        ],
    },
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Rows written by one populate run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopulateReport {
    pub makes_created: usize,
    pub models_created: usize,
}

/// Checks `year` against `MIN_MODEL_YEAR..=current_year`.
pub fn validate_model_year(year: i32, current_year: i32) -> Result<i32, CatalogError> {
    if (MIN_MODEL_YEAR..=current_year).contains(&year) {
        Ok(year)
    } else {
        Err(CatalogError::Validation(format!(
            "Invalid model year: {year}. Year must be between {MIN_MODEL_YEAR} and {current_year}"
        )))
    }
}

#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Get-or-create every built-in make and model. Safe to run repeatedly.
    async fn populate(&self) -> Result<PopulateReport, CatalogError>;

    /// Every model with its make, ordered by make then model. Populates the
    /// catalog first when no make exists yet.
    async fn list_car_models(&self) -> Result<Vec<CarCatalogEntry>, CatalogError>;
}
