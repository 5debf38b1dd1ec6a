//! Event models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::event::EventDto,
    server::{
        error::validation::ValidationErrors,
        util::{
            form::{ImageUpload, MultipartForm},
            parse::parse_event_date,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            location: entity.location,
            event_date: entity.event_date,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            event_date: self.event_date,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: Option<String>,
    /// Only events taking place at or after this instant.
    pub from: Option<DateTime<Utc>>,
}

/// Validated event input. On update every field is optional.
#[derive(Debug, Clone)]
pub struct EventParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub image: Option<ImageUpload>,
}

impl EventParams {
    pub fn from_form(mut form: MultipartForm, creating: bool) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let title = form.non_empty("title");
        let description = form.non_empty("description");
        let location = form.non_empty("location");
        let event_date = match form.non_empty("event_date") {
            Some(raw) => {
                let parsed = parse_event_date(&raw);
                if parsed.is_none() {
                    errors.add("event_date", "The event date is not a valid date.");
                }
                parsed
            }
            None => None,
        };

        if creating {
            for (field, missing) in [
                ("title", title.is_none()),
                ("description", description.is_none()),
                ("location", location.is_none()),
                ("event_date", event_date.is_none() && !errors.has("event_date")),
            ] {
                if missing {
                    errors.add(field, format!("The {} field is required.", field.replace('_', " ")));
                }
            }
        }

        errors.into_result(Self {
            title,
            description,
            location,
            event_date,
            image: form.take_image(),
        })
    }
}
