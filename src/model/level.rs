use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LevelDto {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub total_questions: u64,
}

/// A level as seen by the signed-in player, with lock state and their progress.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserLevelDto {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub total_questions: u64,
    pub unlocked: bool,
    /// `in_progress`, `completed`, or absent when the level was never played
    pub status: Option<String>,
    pub score: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct LevelForm {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}
