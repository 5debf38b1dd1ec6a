//! User progress factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a `completed` progress row with a full score for `user_id` on `level_id`.
pub async fn create_completed_progress(
    db: &DatabaseConnection,
    user_id: i32,
    level_id: i32,
    total_questions: i32,
) -> Result<entity::user_progress::Model, DbErr> {
    create_progress(db, user_id, level_id, "completed", total_questions, total_questions).await
}

/// Creates a progress row with the given status and counts.
///
/// The score is derived from the counts the same way the application does.
pub async fn create_progress(
    db: &DatabaseConnection,
    user_id: i32,
    level_id: i32,
    status: &str,
    correct_answers: i32,
    total_questions: i32,
) -> Result<entity::user_progress::Model, DbErr> {
    let score = if total_questions > 0 {
        (correct_answers as f64 / total_questions as f64 * 100.0).round() as i32
    } else {
        0
    };

    entity::user_progress::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        level_id: ActiveValue::Set(level_id),
        status: ActiveValue::Set(status.to_string()),
        score: ActiveValue::Set(score),
        correct_answers: ActiveValue::Set(correct_answers),
        total_questions: ActiveValue::Set(total_questions),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
