use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Multipart form accepted by the admin user endpoints.
///
/// All fields are required on creation except `role` (defaults to `user`) and `image`.
#[derive(Deserialize, ToSchema)]
pub struct UserForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
