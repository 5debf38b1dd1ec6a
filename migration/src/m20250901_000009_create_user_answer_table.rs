use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000001_create_user_table::User, m20250901_000007_create_level_table::Level,
    m20250901_000008_create_question_table::Question,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAnswer::Table)
                    .if_not_exists()
                    .col(integer(UserAnswer::UserId))
                    .col(integer(UserAnswer::QuestionId))
                    .col(integer(UserAnswer::LevelId))
                    .col(boolean(UserAnswer::IsCorrect))
                    .col(timestamp_with_time_zone(UserAnswer::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(UserAnswer::UpdatedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .name("pk_user_answer")
                            .col(UserAnswer::UserId)
                            .col(UserAnswer::QuestionId)
                            .col(UserAnswer::LevelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_answer_user_id")
                            .from(UserAnswer::Table, UserAnswer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_answer_level_id")
                            .from(UserAnswer::Table, UserAnswer::LevelId)
                            .to(Level::Table, Level::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_answer_question")
                            .from(
                                UserAnswer::Table,
                                (UserAnswer::QuestionId, UserAnswer::LevelId),
                            )
                            .to(Question::Table, (Question::Id, Question::LevelId))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAnswer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAnswer {
    Table,
    UserId,
    QuestionId,
    LevelId,
    IsCorrect,
    CreatedAt,
    UpdatedAt,
}
