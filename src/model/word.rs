use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WordDto {
    pub id: i32,
    pub word: String,
    pub description: Option<String>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Multipart form for word entries. `word` and `image` are required on creation.
#[derive(Deserialize, ToSchema)]
pub struct WordForm {
    pub word: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
