//! Quiz level models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::level::{LevelDto, UserLevelDto},
    server::{
        error::validation::ValidationErrors,
        model::progress::ProgressStatus,
        util::form::{ImageUpload, MultipartForm},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Level {
    pub fn from_entity(entity: entity::level::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            title: entity.title,
            description: entity.description,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A level with the number of questions it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSummary {
    pub level: Level,
    pub total_questions: u64,
}

impl LevelSummary {
    pub fn into_dto(self) -> LevelDto {
        LevelDto {
            id: self.level.id,
            name: self.level.name,
            title: self.level.title,
            description: self.level.description,
            image_url: self.level.image_url,
            total_questions: self.total_questions,
        }
    }
}

/// A level as seen by one player.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLevel {
    pub summary: LevelSummary,
    pub unlocked: bool,
    pub status: Option<ProgressStatus>,
    pub score: i32,
}

impl UserLevel {
    pub fn into_dto(self) -> UserLevelDto {
        let level = self.summary.level;
        UserLevelDto {
            id: level.id,
            name: level.name,
            title: level.title,
            description: level.description,
            image_url: level.image_url,
            total_questions: self.summary.total_questions,
            unlocked: self.unlocked,
            status: self.status.map(|s| s.as_str().to_string()),
            score: self.score,
        }
    }
}

/// Validated level input.
///
/// `description` is `Some(None)` when a blank description was submitted to clear it.
#[derive(Debug, Clone)]
pub struct LevelParams {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<ImageUpload>,
}

impl LevelParams {
    pub fn from_form(mut form: MultipartForm, creating: bool) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let name = form.non_empty("name");
        let title = form.non_empty("title");
        let description = form
            .text("description")
            .map(|d| Some(d).filter(|d| !d.is_empty()));

        if creating {
            if name.is_none() {
                errors.add("name", "The name field is required.");
            }
            if title.is_none() {
                errors.add("title", "The title field is required.");
            }
        }

        errors.into_result(Self {
            name,
            title,
            description,
            image: form.take_image(),
        })
    }
}
