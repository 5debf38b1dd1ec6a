//! Level factory for quiz levels.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating quiz levels.
///
/// Levels are played in ascending id order, so the creation order of levels in a
/// test defines their unlock order.
pub struct LevelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    title: String,
    description: Option<String>,
    image_url: Option<String>,
}

impl<'a> LevelFactory<'a> {
    /// Creates a new LevelFactory with default values.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Level {}", id),
            title: format!("Title {}", id),
            description: None,
            image_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Builds and inserts the level entity into the database.
    pub async fn build(self) -> Result<entity::level::Model, DbErr> {
        let now = Utc::now();
        entity::level::ActiveModel {
            name: ActiveValue::Set(self.name),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a level with default values.
pub async fn create_level(db: &DatabaseConnection) -> Result<entity::level::Model, DbErr> {
    LevelFactory::new(db).build().await
}
