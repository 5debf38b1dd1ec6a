//! Event factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an event taking place at `event_date`.
pub async fn create_event(
    db: &DatabaseConnection,
    title: &str,
    event_date: DateTime<Utc>,
) -> Result<entity::event::Model, DbErr> {
    let now = Utc::now();
    entity::event::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(format!("Description of {}", title)),
        location: ActiveValue::Set("Community Hall".to_string()),
        event_date: ActiveValue::Set(event_date),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
