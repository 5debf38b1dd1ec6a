//! Dictionary letter models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::letter::LetterDto,
    server::{
        error::validation::ValidationErrors,
        util::form::{ImageUpload, MultipartForm},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    pub id: i32,
    pub letter: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Letter {
    pub fn from_entity(entity: entity::letter::Model) -> Self {
        Self {
            id: entity.id,
            letter: entity.letter,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> LetterDto {
        LetterDto {
            id: self.id,
            letter: self.letter,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Normalizes a submitted letter to a single upper-case alphabetic character.
fn normalize_letter(value: Option<String>, required: bool, errors: &mut ValidationErrors) -> Option<String> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        if required {
            errors.add("letter", "The letter field is required.");
        }
        return None;
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c.to_uppercase().collect()),
        _ => {
            errors.add("letter", "The letter must be a single alphabetic character.");
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLetterParams {
    pub letter: String,
    pub image: ImageUpload,
}

impl CreateLetterParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let letter = normalize_letter(form.text("letter"), true, &mut errors);
        let image = form.take_image();
        if image.is_none() && !errors.has("image") {
            errors.add("image", "The image field is required.");
        }

        match (letter, image) {
            (Some(letter), Some(image)) if errors.is_empty() => Ok(Self { letter, image }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateLetterParams {
    pub letter: Option<String>,
    pub image: Option<ImageUpload>,
}

impl UpdateLetterParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let letter = normalize_letter(form.text("letter"), false, &mut errors);

        errors.into_result(Self {
            letter,
            image: form.take_image(),
        })
    }
}
