use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Letter::Table)
                    .if_not_exists()
                    .col(pk_auto(Letter::Id))
                    .col(string_uniq(Letter::Letter))
                    .col(string(Letter::ImageUrl))
                    .col(timestamp_with_time_zone(Letter::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Letter::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Letter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Letter {
    Table,
    Id,
    Letter,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
