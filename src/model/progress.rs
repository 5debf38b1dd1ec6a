use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProgressDto {
    pub level_id: i32,
    /// `in_progress` or `completed`
    pub status: String,
    pub score: i32,
    pub correct_answers: i32,
    pub total_questions: i32,
    pub updated_at: Option<DateTime<Utc>>,
}
