//! Contact channel factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a contact channel for `platform` with the given value.
pub async fn create_contact(
    db: &DatabaseConnection,
    platform: &str,
    value: &str,
) -> Result<entity::contact::Model, DbErr> {
    let now = Utc::now();
    entity::contact::ActiveModel {
        platform: ActiveValue::Set(platform.to_string()),
        value: ActiveValue::Set(value.to_string()),
        url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
