use crate::domain::{Bucket, CarFilter};
use crate::entities::{cars, prelude::*};
use crate::models::Car;
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set,
};

pub struct CarRepository {
    conn: DatabaseConnection,
}

impl CarRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn map_model(m: cars::Model) -> Car {
        Car {
            id: m.id,
            dealer_id: m.dealer_id,
            make: m.make,
            model: m.model,
            body_type: m.body_type,
            year: m.year,
            mileage: m.mileage,
            price: m.price,
        }
    }

    /// Drops the fixture id; storage assigns its own.
    pub(crate) fn to_active_model(car: Car) -> cars::ActiveModel {
        cars::ActiveModel {
            dealer_id: Set(car.dealer_id),
            make: Set(car.make),
            model: Set(car.model),
            body_type: Set(car.body_type),
            year: Set(car.year),
            mileage: Set(car.mileage),
            price: Set(car.price),
            ..Default::default()
        }
    }

    pub async fn find(&self, dealer_id: i32, filter: &CarFilter) -> Result<Vec<Car>> {
        let query = Cars::find().filter(cars::Column::DealerId.eq(dealer_id));

        let rows = Self::apply_filter(query, filter)
            .order_by_asc(cars::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Cars::find().count(&self.conn).await?)
    }

    fn apply_filter(query: Select<Cars>, filter: &CarFilter) -> Select<Cars> {
        match filter {
            CarFilter::All => query,
            CarFilter::Make(make) => query.filter(cars::Column::Make.eq(make.as_str())),
            CarFilter::Model(model) => query.filter(cars::Column::Model.eq(model.as_str())),
            CarFilter::MinYear(year) => query.filter(cars::Column::Year.gte(*year)),
            CarFilter::Mileage(bucket) => Self::within(query, cars::Column::Mileage, bucket),
            CarFilter::Price(bucket) => Self::within(query, cars::Column::Price, bucket),
        }
    }

    fn within(mut query: Select<Cars>, column: cars::Column, bucket: &Bucket) -> Select<Cars> {
        if let Some(lower) = bucket.lower {
            query = query.filter(column.gt(lower));
        }
        if let Some(upper) = bucket.upper {
            query = query.filter(column.lte(upper));
        }
        query
    }
}
