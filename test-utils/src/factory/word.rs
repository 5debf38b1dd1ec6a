//! Word factory for dictionary word entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a word entry without description.
pub async fn create_word(
    db: &DatabaseConnection,
    word: &str,
) -> Result<entity::word::Model, DbErr> {
    let now = Utc::now();
    entity::word::ActiveModel {
        word: ActiveValue::Set(word.to_string()),
        description: ActiveValue::Set(None),
        image_url: ActiveValue::Set(format!("/storage/words/{}.png", word.to_lowercase())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
