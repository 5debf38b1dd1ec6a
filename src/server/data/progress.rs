//! Answer and progress data repository.
//!
//! Stores each player's latest answer per question and the derived per-level progress.
//! Both tables are written with upserts so re-answering replaces the earlier row.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::progress::UserProgress;

/// Answer counts of one player in one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerCounts {
    pub answered: u64,
    pub correct: u64,
}

pub struct ProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a player's answer, replacing any earlier answer to the same question.
    pub async fn upsert_answer(
        &self,
        user_id: i32,
        level_id: i32,
        question_id: i32,
        is_correct: bool,
    ) -> Result<(), DbErr> {
        let now = Utc::now();

        entity::prelude::UserAnswer::insert(entity::user_answer::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            question_id: ActiveValue::Set(question_id),
            level_id: ActiveValue::Set(level_id),
            is_correct: ActiveValue::Set(is_correct),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_answer::Column::UserId,
                entity::user_answer::Column::QuestionId,
                entity::user_answer::Column::LevelId,
            ])
            .update_columns([
                entity::user_answer::Column::IsCorrect,
                entity::user_answer::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Counts a player's answered and correctly answered questions in a level.
    pub async fn answer_counts(&self, user_id: i32, level_id: i32) -> Result<AnswerCounts, DbErr> {
        let answers = entity::prelude::UserAnswer::find()
            .filter(entity::user_answer::Column::UserId.eq(user_id))
            .filter(entity::user_answer::Column::LevelId.eq(level_id));

        let answered = answers.clone().count(self.db).await?;
        let correct = answers
            .filter(entity::user_answer::Column::IsCorrect.eq(true))
            .count(self.db)
            .await?;

        Ok(AnswerCounts { answered, correct })
    }

    /// Stores computed progress, replacing the previous row for the player and level.
    ///
    /// # Returns
    /// - `Ok(UserProgress)` - The stored progress with its update timestamp
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_progress(&self, progress: &UserProgress) -> Result<UserProgress, DbErr> {
        entity::prelude::UserProgress::insert(entity::user_progress::ActiveModel {
            user_id: ActiveValue::Set(progress.user_id),
            level_id: ActiveValue::Set(progress.level_id),
            status: ActiveValue::Set(progress.status.as_str().to_string()),
            score: ActiveValue::Set(progress.score),
            correct_answers: ActiveValue::Set(progress.correct_answers),
            total_questions: ActiveValue::Set(progress.total_questions),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_progress::Column::UserId,
                entity::user_progress::Column::LevelId,
            ])
            .update_columns([
                entity::user_progress::Column::Status,
                entity::user_progress::Column::Score,
                entity::user_progress::Column::CorrectAnswers,
                entity::user_progress::Column::TotalQuestions,
                entity::user_progress::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find(progress.user_id, progress.level_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Progress of user {} on level {} not found after upsert",
                    progress.user_id, progress.level_id
                ))
            })
    }

    pub async fn find(&self, user_id: i32, level_id: i32) -> Result<Option<UserProgress>, DbErr> {
        let entity = entity::prelude::UserProgress::find_by_id((user_id, level_id))
            .one(self.db)
            .await?;

        Ok(entity.map(UserProgress::from_entity))
    }

    /// Gets every progress row of a player in level order.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<UserProgress>, DbErr> {
        let entities = entity::prelude::UserProgress::find()
            .filter(entity::user_progress::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_progress::Column::LevelId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserProgress::from_entity).collect())
    }

    /// Gets every player's progress row for a level.
    pub async fn get_by_level(&self, level_id: i32) -> Result<Vec<UserProgress>, DbErr> {
        let entities = entity::prelude::UserProgress::find()
            .filter(entity::user_progress::Column::LevelId.eq(level_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserProgress::from_entity).collect())
    }

    /// Removes every answer given to a question.
    pub async fn delete_answers_for_question(
        &self,
        level_id: i32,
        question_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::UserAnswer::delete_many()
            .filter(entity::user_answer::Column::LevelId.eq(level_id))
            .filter(entity::user_answer::Column::QuestionId.eq(question_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a player's answers and progress for a level.
    pub async fn reset(&self, user_id: i32, level_id: i32) -> Result<(), DbErr> {
        entity::prelude::UserAnswer::delete_many()
            .filter(entity::user_answer::Column::UserId.eq(user_id))
            .filter(entity::user_answer::Column::LevelId.eq(level_id))
            .exec(self.db)
            .await?;

        entity::prelude::UserProgress::delete_by_id((user_id, level_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
