//! Community factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a community with the given name and no link.
pub async fn create_community(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::community::Model, DbErr> {
    let now = Utc::now();
    entity::community::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(format!("About {}", name)),
        link: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
