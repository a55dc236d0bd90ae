use crate::entities::{car_makes, car_models, prelude::*};
use crate::models::{CarCatalogEntry, CarType};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

pub struct CatalogRepository {
    conn: DatabaseConnection,
}

impl CatalogRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Returns the make with this name, creating it if needed. The flag is
    /// true when a row was created.
    pub async fn get_or_create_make(
        &self,
        name: &str,
        description: &str,
    ) -> Result<(car_makes::Model, bool)> {
        if let Some(existing) = CarMakes::find()
            .filter(car_makes::Column::Name.eq(name))
            .one(&self.conn)
            .await?
        {
            return Ok((existing, false));
        }

        let created = car_makes::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        Ok((created, true))
    }

    pub async fn get_or_create_model(
        &self,
        make_id: i32,
        name: &str,
        car_type: CarType,
        year: i32,
    ) -> Result<(car_models::Model, bool)> {
        if let Some(existing) = CarModels::find()
            .filter(car_models::Column::CarMakeId.eq(make_id))
            .filter(car_models::Column::Name.eq(name))
            .one(&self.conn)
            .await?
        {
            return Ok((existing, false));
        }

        let created = car_models::ActiveModel {
            car_make_id: Set(make_id),
            dealer_id: Set(None),
            name: Set(name.to_string()),
            car_type: Set(car_type.as_str().to_string()),
            year: Set(year),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        Ok((created, true))
    }

    /// Every model paired with its make, ordered by make then model name.
    pub async fn list_entries(&self) -> Result<Vec<CarCatalogEntry>> {
        let rows = CarModels::find()
            .find_also_related(CarMakes)
            .order_by_asc(car_makes::Column::Name)
            .order_by_asc(car_models::Column::Name)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(model, make)| {
                make.map(|make| CarCatalogEntry {
                    model: model.name,
                    make: make.name,
                })
            })
            .collect())
    }

    pub async fn count_makes(&self) -> Result<u64> {
        Ok(CarMakes::find().count(&self.conn).await?)
    }
}
