use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::progress::ProgressDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub level_id: i32,
    pub question: String,
    pub options: Vec<String>,
    /// Only present for admins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<String>,
    pub image_url: Option<String>,
}

/// Multipart form for questions.
///
/// `options` may be repeated (`options` or `options[]`) or sent once as a JSON array.
#[derive(Deserialize, ToSchema)]
pub struct QuestionForm {
    /// Ordinal within the level, defaults to the next free number
    pub id: Option<i32>,
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_option: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SubmitAnswerDto {
    pub answer: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AnswerResultDto {
    pub is_correct: bool,
    pub correct_option: String,
    pub progress: ProgressDto,
}
