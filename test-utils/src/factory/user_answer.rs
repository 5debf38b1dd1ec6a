//! User answer factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records an answer of `user_id` to question `question_id` of level `level_id`.
pub async fn create_user_answer(
    db: &DatabaseConnection,
    user_id: i32,
    level_id: i32,
    question_id: i32,
    is_correct: bool,
) -> Result<entity::user_answer::Model, DbErr> {
    let now = Utc::now();
    entity::user_answer::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        question_id: ActiveValue::Set(question_id),
        level_id: ActiveValue::Set(level_id),
        is_correct: ActiveValue::Set(is_correct),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
