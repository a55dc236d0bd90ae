use crate::entities::{prelude::*, reviews};
use crate::models::{NewReview, Review};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::info;

pub struct ReviewRepository {
    conn: DatabaseConnection,
}

impl ReviewRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn map_model(m: reviews::Model) -> Review {
        Review {
            id: m.id,
            name: m.name,
            dealership: m.dealership,
            review: m.review,
            purchase: m.purchase,
            purchase_date: m.purchase_date,
            car_make: m.car_make,
            car_model: m.car_model,
            car_year: m.car_year,
        }
    }

    /// Keeps the fixture id.
    pub(crate) fn to_active_model(review: Review) -> reviews::ActiveModel {
        reviews::ActiveModel {
            id: Set(review.id),
            name: Set(review.name),
            dealership: Set(review.dealership),
            review: Set(review.review),
            purchase: Set(review.purchase),
            purchase_date: Set(review.purchase_date),
            car_make: Set(review.car_make),
            car_model: Set(review.car_model),
            car_year: Set(review.car_year),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Review>> {
        let rows = Reviews::find()
            .order_by_asc(reviews::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn list_for_dealer(&self, dealer_id: i32) -> Result<Vec<Review>> {
        let rows = Reviews::find()
            .filter(reviews::Column::Dealership.eq(dealer_id))
            .order_by_asc(reviews::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Inserts a validated submission. The id is left unset so the database
    /// assigns it within the same statement.
    pub async fn insert(&self, payload: NewReview) -> Result<Review> {
        let dealership = payload
            .dealership
            .ok_or_else(|| anyhow::anyhow!("review payload has no dealership"))?;

        let active_model = reviews::ActiveModel {
            name: Set(payload.name.unwrap_or_default()),
            dealership: Set(dealership),
            review: Set(payload.review.unwrap_or_default()),
            purchase: Set(payload.purchase),
            purchase_date: Set(payload.purchase_date),
            car_make: Set(payload.car_make),
            car_model: Set(payload.car_model),
            car_year: Set(payload.car_year),
            ..Default::default()
        };

        let saved = active_model.insert(&self.conn).await?;
        info!("Inserted review {} for dealer {}", saved.id, saved.dealership);
        Ok(Self::map_model(saved))
    }

    pub async fn max_id(&self) -> Result<Option<i32>> {
        let max = Reviews::find()
            .select_only()
            .column_as(reviews::Column::Id.max(), "max_id")
            .into_tuple::<Option<i32>>()
            .one(&self.conn)
            .await?;

        Ok(max.flatten())
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Reviews::find().count(&self.conn).await?)
    }
}
