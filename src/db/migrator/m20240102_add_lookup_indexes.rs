use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_cars_dealer_id")
                    .table(Cars::Table)
                    .col(Cars::DealerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_dealership")
                    .table(Reviews::Table)
                    .col(Reviews::Dealership)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dealerships_state")
                    .table(Dealerships::Table)
                    .col(Dealerships::State)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_dealerships_state").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_dealership").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cars_dealer_id").to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    DealerId,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Dealership,
}

#[derive(DeriveIden)]
enum Dealerships {
    Table,
    State,
}
