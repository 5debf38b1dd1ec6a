use chrono::{DateTime, Utc};

use crate::{
    model::message::{CreateMessageDto, MessageDto},
    server::{error::validation::ValidationErrors, util::parse::is_valid_email},
};

const MAX_BODY_LENGTH: usize = 5000;

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            body: entity.body,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            body: self.body,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMessageParams {
    pub user_id: Option<i32>,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
}

impl CreateMessageParams {
    /// Validates a contact form submission, attaching `user_id` when the sender is logged in.
    pub fn from_dto(dto: CreateMessageDto, user_id: Option<i32>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = dto.name.trim().to_string();
        let email = dto.email.trim().to_string();
        let subject = dto
            .subject
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let body = dto.body.trim().to_string();

        if name.is_empty() {
            errors.add("name", "The name field is required.");
        }
        if email.is_empty() {
            errors.add("email", "The email field is required.");
        } else if !is_valid_email(&email) {
            errors.add("email", "The email must be a valid email address.");
        }
        if body.is_empty() {
            errors.add("body", "The body field is required.");
        } else if body.chars().count() > MAX_BODY_LENGTH {
            errors.add("body", "The body may not be greater than 5000 characters.");
        }

        errors.into_result(Self {
            user_id,
            name,
            email,
            subject,
            body,
        })
    }
}
