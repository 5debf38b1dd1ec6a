use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Word::Table)
                    .if_not_exists()
                    .col(pk_auto(Word::Id))
                    .col(string_uniq(Word::Word))
                    .col(text_null(Word::Description))
                    .col(string(Word::ImageUrl))
                    .col(timestamp_with_time_zone(Word::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Word::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Word::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Word {
    Table,
    Id,
    Word,
    Description,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
