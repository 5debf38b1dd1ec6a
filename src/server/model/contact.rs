use chrono::{DateTime, Utc};

use crate::{
    model::contact::{ContactDto, ContactPayloadDto},
    server::{error::validation::ValidationErrors, util::parse::is_http_url},
};

/// One of the organisation's contact channels, such as a phone number or social account.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i32,
    pub platform: String,
    pub value: String,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn from_entity(entity: entity::contact::Model) -> Self {
        Self {
            id: entity.id,
            platform: entity.platform,
            value: entity.value,
            url: entity.url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            id: self.id,
            platform: self.platform,
            value: self.value,
            url: self.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactParams {
    pub platform: String,
    pub value: String,
    pub url: Option<String>,
}

impl ContactParams {
    pub fn from_dto(dto: ContactPayloadDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let platform = dto.platform.trim().to_string();
        let value = dto.value.trim().to_string();
        let url = dto
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        if platform.is_empty() {
            errors.add("platform", "The platform field is required.");
        }
        if value.is_empty() {
            errors.add("value", "The value field is required.");
        }
        if url.as_deref().is_some_and(|u| !is_http_url(u)) {
            errors.add("url", "The url must be a valid URL.");
        }

        errors.into_result(Self {
            platform,
            value,
            url,
        })
    }
}
