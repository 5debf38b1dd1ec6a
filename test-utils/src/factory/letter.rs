//! Letter factory for dictionary letter entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a letter entry with an image under `/storage/letters`.
///
/// # Arguments
/// - `db` - Database connection
/// - `letter` - The letter, stored as given
pub async fn create_letter(
    db: &DatabaseConnection,
    letter: &str,
) -> Result<entity::letter::Model, DbErr> {
    let now = Utc::now();
    entity::letter::ActiveModel {
        letter: ActiveValue::Set(letter.to_string()),
        image_url: ActiveValue::Set(format!("/storage/letters/{}.png", letter.to_lowercase())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
