use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000007_create_level_table::Level;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Question::Table)
                    .if_not_exists()
                    .col(integer(Question::Id))
                    .col(integer(Question::LevelId))
                    .col(text(Question::Question))
                    .col(string(Question::CorrectOption))
                    .col(json(Question::Options))
                    .col(string_null(Question::ImageUrl))
                    .col(timestamp_with_time_zone(Question::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Question::UpdatedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .name("pk_question")
                            .col(Question::Id)
                            .col(Question::LevelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_level_id")
                            .from(Question::Table, Question::LevelId)
                            .to(Level::Table, Level::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Question::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Question {
    Table,
    Id,
    LevelId,
    Question,
    CorrectOption,
    Options,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
