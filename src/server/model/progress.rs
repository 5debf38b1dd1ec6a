//! Quiz progress models.
//!
//! A progress row aggregates a player's answers for one level. It is always derived
//! from the stored answers and the level's current question count, never edited
//! directly.

use chrono::{DateTime, Utc};

use crate::model::progress::ProgressDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "completed" => Self::Completed,
            _ => Self::InProgress,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProgress {
    pub user_id: i32,
    pub level_id: i32,
    pub status: ProgressStatus,
    pub score: i32,
    pub correct_answers: i32,
    pub total_questions: i32,
    /// `None` for a level the player has not started.
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProgress {
    pub fn from_entity(entity: entity::user_progress::Model) -> Self {
        Self {
            user_id: entity.user_id,
            level_id: entity.level_id,
            status: ProgressStatus::parse(&entity.status),
            score: entity.score,
            correct_answers: entity.correct_answers,
            total_questions: entity.total_questions,
            updated_at: Some(entity.updated_at),
        }
    }

    /// Progress of a player who has not answered anything in the level yet.
    pub fn not_started(user_id: i32, level_id: i32, total_questions: i32) -> Self {
        Self::compute(user_id, level_id, total_questions, 0, 0)
    }

    /// Derives progress from answer counts.
    ///
    /// The score is the rounded percentage of correct answers over the level's
    /// questions (0 for an empty level). The level is completed once every question
    /// has been answered.
    pub fn compute(
        user_id: i32,
        level_id: i32,
        total_questions: i32,
        answered: i32,
        correct_answers: i32,
    ) -> Self {
        let score = if total_questions > 0 {
            (correct_answers as f64 / total_questions as f64 * 100.0).round() as i32
        } else {
            0
        };

        let status = if total_questions > 0 && answered >= total_questions {
            ProgressStatus::Completed
        } else {
            ProgressStatus::InProgress
        };

        Self {
            user_id,
            level_id,
            status,
            score,
            correct_answers,
            total_questions,
            updated_at: None,
        }
    }

    pub fn into_dto(self) -> ProgressDto {
        ProgressDto {
            level_id: self.level_id,
            status: self.status.as_str().to_string(),
            score: self.score,
            correct_answers: self.correct_answers,
            total_questions: self.total_questions,
            updated_at: self.updated_at,
        }
    }
}

/// Outcome of submitting one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub correct_option: String,
    pub progress: UserProgress,
}

impl AnswerResult {
    pub fn into_dto(self) -> crate::model::question::AnswerResultDto {
        crate::model::question::AnswerResultDto {
            is_correct: self.is_correct,
            correct_option: self.correct_option,
            progress: self.progress.into_dto(),
        }
    }
}
