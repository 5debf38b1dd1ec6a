//! News article models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::news::NewsDto,
    server::{
        error::validation::ValidationErrors,
        util::form::{ImageUpload, MultipartForm},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated news input. On update every field is optional.
#[derive(Debug, Clone)]
pub struct NewsParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<ImageUpload>,
}

impl NewsParams {
    pub fn from_form(mut form: MultipartForm, creating: bool) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let title = form.non_empty("title");
        let content = form.non_empty("content");

        if creating {
            if title.is_none() {
                errors.add("title", "The title field is required.");
            }
            if content.is_none() {
                errors.add("content", "The content field is required.");
            }
        }
        if title.as_ref().is_some_and(|t| t.chars().count() > 255) {
            errors.add("title", "The title may not be greater than 255 characters.");
        }

        errors.into_result(Self {
            title,
            content,
            image: form.take_image(),
        })
    }
}
