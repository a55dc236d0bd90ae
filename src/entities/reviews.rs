use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Auto-increment: SQLite assigns the next id inside the INSERT itself.
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Dealer reference, not a foreign key: reviews may name dealers that
    /// are absent from the dealership collection.
    pub dealership: i32,
    #[sea_orm(column_type = "Text")]
    pub review: String,
    pub purchase: bool,
    pub purchase_date: Option<String>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
