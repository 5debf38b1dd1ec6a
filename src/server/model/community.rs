//! Community models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::community::CommunityDto,
    server::{
        error::validation::ValidationErrors,
        util::{
            form::{ImageUpload, MultipartForm},
            parse::is_http_url,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    pub fn from_entity(entity: entity::community::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            link: entity.link,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommunityDto {
        CommunityDto {
            id: self.id,
            name: self.name,
            description: self.description,
            link: self.link,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated community input.
///
/// `link` is `Some(None)` when a blank link was submitted to clear it.
#[derive(Debug, Clone)]
pub struct CommunityParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<Option<String>>,
    pub image: Option<ImageUpload>,
}

impl CommunityParams {
    pub fn from_form(mut form: MultipartForm, creating: bool) -> Result<Self, ValidationErrors> {
        let mut errors = form.take_errors();

        let name = form.non_empty("name");
        let description = form.non_empty("description");
        let link = form.text("link").map(|l| Some(l).filter(|l| !l.is_empty()));

        if creating {
            if name.is_none() {
                errors.add("name", "The name field is required.");
            }
            if description.is_none() {
                errors.add("description", "The description field is required.");
            }
        }
        if let Some(Some(link)) = &link {
            if !is_http_url(link) {
                errors.add("link", "The link must be a valid URL.");
            }
        }

        errors.into_result(Self {
            name,
            description,
            link,
            image: form.take_image(),
        })
    }
}
