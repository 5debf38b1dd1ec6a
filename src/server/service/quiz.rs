//! Quiz progress, scoring and level gating.

use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};

use crate::server::{
    data::{level::LevelRepository, progress::ProgressRepository, question::QuestionRepository},
    error::{auth::AuthError, AppError},
    model::{
        level::UserLevel,
        progress::{AnswerResult, ProgressStatus, UserProgress},
        user::User,
    },
};

/// Decides which levels are playable given levels in play order and the IDs of the
/// completed ones. The first level is always unlocked, every other one only once the
/// level right before it is completed.
pub fn unlock_states(level_ids: &[i32], completed: &HashSet<i32>) -> Vec<bool> {
    level_ids
        .iter()
        .enumerate()
        .map(|(index, _)| index == 0 || completed.contains(&level_ids[index - 1]))
        .collect()
}

pub struct QuizService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether `user` may play `level_id`. Admins may play every level.
    pub async fn is_level_unlocked(&self, user: &User, level_id: i32) -> Result<bool, AppError> {
        if user.is_admin() {
            return Ok(true);
        }

        let Some(previous_id) = LevelRepository::new(self.db)
            .find_previous_id(level_id)
            .await?
        else {
            return Ok(true);
        };

        let completed = ProgressRepository::new(self.db)
            .find(user.id, previous_id)
            .await?
            .is_some_and(|progress| {
                progress.status == ProgressStatus::Completed
            });

        Ok(completed)
    }

    /// Fails with `AuthError::LevelLocked` when the level is not playable yet.
    pub async fn ensure_unlocked(&self, user: &User, level_id: i32) -> Result<(), AppError> {
        if !self.is_level_unlocked(user, level_id).await? {
            return Err(AuthError::LevelLocked {
                user_id: user.id,
                level_id,
            }
            .into());
        }

        Ok(())
    }

    /// Records an answer and returns it together with the player's updated progress.
    ///
    /// # Returns
    /// - `Ok(AnswerResult)` - Answer stored and progress recomputed
    /// - `Err(AppError::NotFound)` - Level or question does not exist
    /// - `Err(AuthError::LevelLocked)` - Previous level not completed yet
    /// - `Err(AppError::Validation)` - Answer is not one of the question's options
    pub async fn submit_answer(
        &self,
        user: &User,
        level_id: i32,
        question_id: i32,
        answer: &str,
    ) -> Result<AnswerResult, AppError> {
        if LevelRepository::new(self.db)
            .find_by_id(level_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Level not found".to_string()));
        }

        let question = QuestionRepository::new(self.db)
            .find(level_id, question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        self.ensure_unlocked(user, level_id).await?;

        let answer = answer.trim();
        if !question.offers(answer) {
            return Err(AppError::invalid(
                "answer",
                "The selected answer is not one of the options.",
            ));
        }

        let is_correct = answer == question.correct_option.trim();

        ProgressRepository::new(self.db)
            .upsert_answer(user.id, level_id, question_id, is_correct)
            .await?;

        let progress = self.recompute(user.id, level_id).await?;

        tracing::debug!(
            "User {} answered question {} of level {} ({})",
            user.id,
            question_id,
            level_id,
            if is_correct { "correct" } else { "wrong" }
        );

        Ok(AnswerResult {
            is_correct,
            correct_option: question.correct_option,
            progress,
        })
    }

    /// Gets a player's progress on a level, zeroed when the level was never started.
    pub async fn get_progress(&self, user_id: i32, level_id: i32) -> Result<UserProgress, AppError> {
        let Some(summary) = LevelRepository::new(self.db).find_summary(level_id).await? else {
            return Err(AppError::NotFound("Level not found".to_string()));
        };

        let progress = ProgressRepository::new(self.db)
            .find(user_id, level_id)
            .await?;

        Ok(progress.unwrap_or_else(|| {
            UserProgress::not_started(user_id, level_id, summary.total_questions as i32)
        }))
    }

    pub async fn list_progress(&self, user_id: i32) -> Result<Vec<UserProgress>, AppError> {
        Ok(ProgressRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Every level in play order with the player's unlock state, status and score.
    pub async fn levels_for_user(&self, user: &User) -> Result<Vec<UserLevel>, AppError> {
        let levels = LevelRepository::new(self.db).get_all().await?;
        let mut progress: HashMap<i32, UserProgress> = ProgressRepository::new(self.db)
            .get_by_user(user.id)
            .await?
            .into_iter()
            .map(|progress| (progress.level_id, progress))
            .collect();

        let level_ids: Vec<i32> = levels.iter().map(|summary| summary.level.id).collect();
        let completed: HashSet<i32> = progress
            .values()
            .filter(|progress| {
                progress.status == ProgressStatus::Completed
            })
            .map(|progress| progress.level_id)
            .collect();
        let unlocked = unlock_states(&level_ids, &completed);

        Ok(levels
            .into_iter()
            .zip(unlocked)
            .map(|(summary, unlocked)| {
                let progress = progress.remove(&summary.level.id);
                UserLevel {
                    unlocked: unlocked || user.is_admin(),
                    status: progress.as_ref().map(|p| p.status),
                    score: progress.map_or(0, |p| p.score),
                    summary,
                }
            })
            .collect())
    }

    /// Deletes a player's answers and progress for a level so it can be replayed.
    pub async fn reset_progress(&self, user_id: i32, level_id: i32) -> Result<(), AppError> {
        if LevelRepository::new(self.db)
            .find_by_id(level_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Level not found".to_string()));
        }

        ProgressRepository::new(self.db)
            .reset(user_id, level_id)
            .await?;

        tracing::info!("Reset progress of user {} on level {}", user_id, level_id);

        Ok(())
    }

    /// Re-derives every stored progress row of a level after its question set changed.
    pub async fn refresh_level(&self, level_id: i32) -> Result<(), AppError> {
        let rows = ProgressRepository::new(self.db)
            .get_by_level(level_id)
            .await?;

        for row in &rows {
            self.recompute(row.user_id, level_id).await?;
        }

        if !rows.is_empty() {
            tracing::debug!("Refreshed {} progress rows of level {}", rows.len(), level_id);
        }

        Ok(())
    }

    async fn recompute(&self, user_id: i32, level_id: i32) -> Result<UserProgress, AppError> {
        let progress_repo = ProgressRepository::new(self.db);

        let total = QuestionRepository::new(self.db)
            .count_by_level(level_id)
            .await?;
        let counts = progress_repo.answer_counts(user_id, level_id).await?;

        let progress = UserProgress::compute(
            user_id,
            level_id,
            total as i32,
            counts.answered as i32,
            counts.correct as i32,
        );

        Ok(progress_repo.upsert_progress(&progress).await?)
    }
}
