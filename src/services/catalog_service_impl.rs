//! `SeaORM` implementation of the `CatalogService` trait.

use crate::db::Store;
use crate::models::CarCatalogEntry;
use crate::services::catalog_service::{
    BUILTIN_CATALOG, CatalogError, CatalogService, PopulateReport, validate_model_year,
};
use async_trait::async_trait;
use chrono::Datelike;
use tracing::{debug, info};

pub struct SeaOrmCatalogService {
    store: Store,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for SeaOrmCatalogService {
    async fn populate(&self) -> Result<PopulateReport, CatalogError> {
        let current_year = chrono::Utc::now().year();
        let mut report = PopulateReport::default();

        for make in BUILTIN_CATALOG {
            if self
                .store
                .get_or_create_car_make(make.name, make.description)
                .await?
            {
                info!("Created car make: {}", make.name);
                report.makes_created += 1;
            } else {
                debug!("Car make already exists: {}", make.name);
            }

            for model in make.models {
                let year = validate_model_year(model.year, current_year)?;
                if self
                    .store
                    .get_or_create_car_model(make.name, model.name, model.car_type, year)
                    .await?
                {
                    info!("Created car model: {} {} ({})", make.name, model.name, year);
                    report.models_created += 1;
                }
            }
        }

        Ok(report)
    }

    async fn list_car_models(&self) -> Result<Vec<CarCatalogEntry>, CatalogError> {
        if self.store.count_car_makes().await? == 0 {
            info!("Car catalog is empty, populating");
            self.populate().await?;
        }

        let entries = self.store.list_car_catalog().await?;
        debug!("Retrieved {} car models", entries.len());
        Ok(entries)
    }
}
