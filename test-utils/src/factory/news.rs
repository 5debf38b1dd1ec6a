//! News factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a news article with the given title, created at `created_at`.
pub async fn create_news_at(
    db: &DatabaseConnection,
    title: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::news::Model, DbErr> {
    entity::news::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        content: ActiveValue::Set(format!("Content of {}", title)),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
        updated_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a news article with the given title, created now.
pub async fn create_news(
    db: &DatabaseConnection,
    title: &str,
) -> Result<entity::news::Model, DbErr> {
    create_news_at(db, title, Utc::now()).await
}
