use crate::entities::{dealerships, prelude::*};
use crate::models::Dealer;
use anyhow::Result;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

pub struct DealerRepository {
    conn: DatabaseConnection,
}

impl DealerRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub(crate) fn map_model(m: dealerships::Model) -> Dealer {
        Dealer {
            id: m.id,
            full_name: m.full_name,
            short_name: m.short_name,
            city: m.city,
            address: m.address,
            zip: m.zip,
            state: m.state,
        }
    }

    pub(crate) fn to_active_model(dealer: Dealer) -> dealerships::ActiveModel {
        dealerships::ActiveModel {
            id: Set(dealer.id),
            full_name: Set(dealer.full_name),
            short_name: Set(dealer.short_name),
            city: Set(dealer.city),
            address: Set(dealer.address),
            zip: Set(dealer.zip),
            state: Set(dealer.state),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Dealer>> {
        let rows = Dealerships::find()
            .order_by_asc(dealerships::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn list_by_state(&self, state: &str) -> Result<Vec<Dealer>> {
        let rows = Dealerships::find()
            .filter(dealerships::Column::State.eq(state))
            .order_by_asc(dealerships::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Dealer>> {
        let row = Dealerships::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Dealerships::find().count(&self.conn).await?)
    }
}
