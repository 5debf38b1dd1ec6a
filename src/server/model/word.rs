//! Dictionary word models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::word::WordDto,
    server::{
        error::validation::ValidationErrors,
        util::form::{ImageUpload, MultipartForm},
    },
};

const MAX_WORD_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub id: i32,
    pub word: String,
    pub description: Option<String>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Word {
    pub fn from_entity(entity: entity::word::Model) -> Self {
        Self {
            id: entity.id,
            word: entity.word,
            description: entity.description,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> WordDto {
        WordDto {
            id: self.id,
            word: self.word,
            description: self.description,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Filters for the public word list.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    pub search: Option<String>,
    /// Only words starting with this letter.
    pub letter: Option<char>,
}

fn validate_word(value: Option<String>, required: bool, errors: &mut ValidationErrors) -> Option<String> {
    match value.filter(|v| !v.is_empty()) {
        Some(word) if word.chars().count() > MAX_WORD_LENGTH => {
            errors.add("word", "The word may not be greater than 255 characters.");
            None
        }
        Some(word) => Some(word),
        None => {
            if required {
                errors.add("word", "The word field is required.");
            }
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateWordParams {
    pub word: String,
    pub description: Option<String>,
    pub image: ImageUpload,
}

impl CreateWordParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let word = validate_word(form.text("word"), true, &mut errors);
        let image = form.take_image();
        if image.is_none() && !errors.has("image") {
            errors.add("image", "The image field is required.");
        }

        match (word, image) {
            (Some(word), Some(image)) if errors.is_empty() => Ok(Self {
                word,
                description: form.non_empty("description"),
                image,
            }),
            _ => Err(errors),
        }
    }
}

/// Word changes. A blank `description` clears it, an absent one keeps it.
#[derive(Debug, Clone)]
pub struct UpdateWordParams {
    pub word: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<ImageUpload>,
}

impl UpdateWordParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let word = validate_word(form.text("word"), false, &mut errors);
        let description = form
            .text("description")
            .map(|d| Some(d).filter(|d| !d.is_empty()));

        errors.into_result(Self {
            word,
            description,
            image: form.take_image(),
        })
    }
}
