use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_user_table::User, m20250901_000007_create_level_table::Level,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProgress::Table)
                    .if_not_exists()
                    .col(integer(UserProgress::UserId))
                    .col(integer(UserProgress::LevelId))
                    .col(string(UserProgress::Status).default("in_progress"))
                    .col(integer(UserProgress::Score).default(0))
                    .col(integer(UserProgress::CorrectAnswers).default(0))
                    .col(integer(UserProgress::TotalQuestions).default(0))
                    .col(timestamp_with_time_zone(UserProgress::UpdatedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .name("pk_user_progress")
                            .col(UserProgress::UserId)
                            .col(UserProgress::LevelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_progress_user_id")
                            .from(UserProgress::Table, UserProgress::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_progress_level_id")
                            .from(UserProgress::Table, UserProgress::LevelId)
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
            .drop_table(Table::drop().table(UserProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProgress {
    Table,
    UserId,
    LevelId,
    Status,
    Score,
    CorrectAnswers,
    TotalQuestions,
    UpdatedAt,
}
