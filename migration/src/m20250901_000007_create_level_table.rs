use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Level::Table)
                    .if_not_exists()
                    .col(pk_auto(Level::Id))
                    .col(string(Level::Name))
                    .col(string(Level::Title))
                    .col(text_null(Level::Description))
                    .col(string_null(Level::ImageUrl))
                    .col(timestamp_with_time_zone(Level::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Level::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Level::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Level {
    Table,
    Id,
    Name,
    Title,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
