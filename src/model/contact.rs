use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ContactDto {
    pub id: i32,
    pub platform: String,
    pub value: String,
    pub url: Option<String>,
}

/// Payload for creating or replacing a contact channel.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ContactPayloadDto {
    pub platform: String,
    pub value: String,
    pub url: Option<String>,
}
