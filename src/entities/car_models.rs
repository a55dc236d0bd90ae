use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "car_models")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub car_make_id: i32,
    pub dealer_id: Option<i32>,
    pub name: String,
    /// `SEDAN`, `SUV` or `WAGON`.
    pub car_type: String,
    pub year: i32,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car_makes::Entity",
        from = "Column::CarMakeId",
        to = "super::car_makes::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CarMakes,
}

impl Related<super::car_makes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarMakes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
