//! Contact form message factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an anonymous message with the given read flag.
pub async fn create_message(
    db: &DatabaseConnection,
    is_read: bool,
) -> Result<entity::message::Model, DbErr> {
    let id = next_id();
    entity::message::ActiveModel {
        user_id: ActiveValue::Set(None),
        name: ActiveValue::Set(format!("Sender {}", id)),
        email: ActiveValue::Set(format!("sender{}@example.com", id)),
        subject: ActiveValue::Set(Some("Question".to_string())),
        body: ActiveValue::Set("Hello, I have a question about the app.".to_string()),
        is_read: ActiveValue::Set(is_read),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
