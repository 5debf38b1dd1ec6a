//! Question factory for quiz questions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating questions of a level.
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    level_id: i32,
    question: String,
    options: Vec<String>,
    correct_option: String,
    image_url: Option<String>,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory for question `id` of level `level_id`.
    ///
    /// Defaults to the options `["A", "B", "C"]` with `"A"` correct.
    pub fn new(db: &'a DatabaseConnection, level_id: i32, id: i32) -> Self {
        Self {
            db,
            id,
            level_id,
            question: format!("Question {}", id),
            options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            correct_option: "A".to_string(),
            image_url: None,
        }
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn correct_option(mut self, correct_option: impl Into<String>) -> Self {
        self.correct_option = correct_option.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Builds and inserts the question entity into the database.
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        let now = Utc::now();
        entity::question::ActiveModel {
            id: ActiveValue::Set(self.id),
            level_id: ActiveValue::Set(self.level_id),
            question: ActiveValue::Set(self.question),
            correct_option: ActiveValue::Set(self.correct_option),
            options: ActiveValue::Set(serde_json::json!(self.options)),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates question `id` of level `level_id` with default values.
pub async fn create_question(
    db: &DatabaseConnection,
    level_id: i32,
    id: i32,
) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db, level_id, id).build().await
}
