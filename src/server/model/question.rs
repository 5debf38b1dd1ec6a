//! Quiz question models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::question::QuestionDto,
    server::{
        error::{internal::InternalError, validation::ValidationErrors},
        util::form::{ImageUpload, MultipartForm},
    },
};

pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Ordinal of the question within its level.
    pub id: i32,
    pub level_id: i32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Question)` - Converted question
    /// - `Err(InternalError::MalformedOptions)` - Stored options are not a JSON string array
    pub fn from_entity(entity: entity::question::Model) -> Result<Self, InternalError> {
        let options: Vec<String> =
            serde_json::from_value(entity.options).map_err(|e| InternalError::MalformedOptions {
                level_id: entity.level_id,
                question_id: entity.id,
                reason: e.to_string(),
            })?;

        Ok(Self {
            id: entity.id,
            level_id: entity.level_id,
            question: entity.question,
            options,
            correct_option: entity.correct_option,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Whether `answer` is one of the offered options.
    pub fn offers(&self, answer: &str) -> bool {
        self.options.iter().any(|option| option.trim() == answer)
    }

    /// Converts to a DTO, exposing the correct option only when `reveal_answer` is set.
    pub fn into_dto(self, reveal_answer: bool) -> QuestionDto {
        QuestionDto {
            id: self.id,
            level_id: self.level_id,
            question: self.question,
            options: self.options,
            correct_option: reveal_answer.then_some(self.correct_option),
            image_url: self.image_url,
        }
    }
}

/// Checks the option list and that the correct option is one of them.
pub fn validate_options(options: &[String], correct_option: &str, errors: &mut ValidationErrors) {
    if options.len() < MIN_OPTIONS {
        errors.add("options", "The options must have at least 2 items.");
    }
    if options.iter().any(|option| option.is_empty()) {
        errors.add("options", "The options may not contain empty values.");
    }
    let mut seen = std::collections::HashSet::new();
    if !options.iter().all(|option| seen.insert(option.as_str())) {
        errors.add("options", "The options must be distinct.");
    }
    if !options.iter().any(|option| option == correct_option) {
        errors.add("correct_option", "The correct option must be one of the options.");
    }
}

#[derive(Debug, Clone)]
pub struct CreateQuestionParams {
    /// Explicit ordinal, otherwise the next free one in the level.
    pub id: Option<i32>,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: String,
    pub image: Option<ImageUpload>,
}

fn parse_ordinal(form: &MultipartForm, errors: &mut ValidationErrors) -> Option<i32> {
    let raw = form.non_empty("id")?;

    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add("id", "The id must be a positive integer.");
            None
        }
    }
}

impl CreateQuestionParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let id = parse_ordinal(&form, &mut errors);
        let question = form.non_empty("question");
        let options = form.list("options").unwrap_or_default();
        let correct_option = form.non_empty("correct_option");

        if question.is_none() {
            errors.add("question", "The question field is required.");
        }
        match &correct_option {
            Some(correct_option) => validate_options(&options, correct_option, &mut errors),
            None => errors.add("correct_option", "The correct option field is required."),
        }

        match (question, correct_option) {
            (Some(question), Some(correct_option)) if errors.is_empty() => Ok(Self {
                id,
                question,
                options,
                correct_option,
                image: form.take_image(),
            }),
            _ => Err(errors),
        }
    }
}

/// Question changes; options and correct option are validated against the merged result.
#[derive(Debug, Clone)]
pub struct UpdateQuestionParams {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_option: Option<String>,
    pub image: Option<ImageUpload>,
}

impl UpdateQuestionParams {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ValidationErrors> {
        let errors = form.take_errors();

        errors.into_result(Self {
            question: form.non_empty("question"),
            options: form.list("options"),
            correct_option: form.non_empty("correct_option"),
            image: form.take_image(),
        })
    }
}
