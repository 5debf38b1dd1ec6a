use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        level::LevelRepository,
        progress::ProgressRepository,
        question::{NewQuestion, QuestionChanges, QuestionRepository},
    },
    error::{validation::ValidationErrors, AppError},
    model::question::{validate_options, CreateQuestionParams, Question, UpdateQuestionParams},
    service::quiz::QuizService,
    util::storage::ImageStorage,
};

const IMAGE_FOLDER: &str = "questions";

/// Question management within a level.
///
/// Every change to a level's question set re-derives the stored progress of the
/// level's players so totals and scores stay consistent.
pub struct QuestionService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> QuestionService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    /// Gets every question of a level in ordinal order.
    ///
    /// # Returns
    /// - `Ok(Vec<Question>)` - Questions of the level, possibly empty
    /// - `Err(AppError::NotFound)` - Level does not exist
    pub async fn get_by_level(&self, level_id: i32) -> Result<Vec<Question>, AppError> {
        self.ensure_level(level_id).await?;

        Ok(QuestionRepository::new(self.db)
            .get_by_level(level_id)
            .await?)
    }

    pub async fn get(&self, level_id: i32, id: i32) -> Result<Question, AppError> {
        self.ensure_level(level_id).await?;

        QuestionRepository::new(self.db)
            .find(level_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))
    }

    /// Adds a question to a level under the requested or next free ordinal.
    pub async fn create(
        &self,
        level_id: i32,
        params: CreateQuestionParams,
    ) -> Result<Question, AppError> {
        self.ensure_level(level_id).await?;
        let question_repo = QuestionRepository::new(self.db);

        let id = match params.id {
            Some(id) => {
                if question_repo.find(level_id, id).await?.is_some() {
                    return Err(AppError::invalid("id", "The id has already been taken."));
                }
                id
            }
            None => question_repo.next_id(level_id).await?,
        };

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = question_repo
            .create(NewQuestion {
                id,
                level_id,
                question: params.question,
                options: params.options,
                correct_option: params.correct_option,
                image_url: image_url.clone(),
            })
            .await;
        let question = self
            .storage
            .discard_on_error(image_url.as_deref(), result)
            .await?;

        QuizService::new(self.db).refresh_level(level_id).await?;

        Ok(question)
    }

    /// Updates a question. The merged options and correct option must stay consistent.
    pub async fn update(
        &self,
        level_id: i32,
        id: i32,
        params: UpdateQuestionParams,
    ) -> Result<Question, AppError> {
        let existing = self.get(level_id, id).await?;

        let options = params.options.as_ref().unwrap_or(&existing.options);
        let correct_option = params
            .correct_option
            .as_deref()
            .unwrap_or(&existing.correct_option);

        let mut errors = ValidationErrors::new();
        validate_options(options, correct_option, &mut errors);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = QuestionRepository::new(self.db)
            .update(
                level_id,
                id,
                QuestionChanges {
                    question: params.question,
                    options: params.options,
                    correct_option: params.correct_option,
                    image_url: image_url.clone(),
                },
            )
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AppError::NotFound("Question not found".to_string()))
            });
        let updated = self
            .storage
            .discard_on_error(image_url.as_deref(), result)
            .await?;

        self.storage
            .delete_replaced(existing.image_url.as_deref(), updated.image_url.as_deref())
            .await?;

        Ok(updated)
    }

    /// Removes a question with its answers and re-derives the level's progress.
    pub async fn delete(&self, level_id: i32, id: i32) -> Result<(), AppError> {
        let question = self.get(level_id, id).await?;

        ProgressRepository::new(self.db)
            .delete_answers_for_question(level_id, id)
            .await?;
        QuestionRepository::new(self.db).delete(level_id, id).await?;

        if let Some(image_url) = &question.image_url {
            self.storage.delete(image_url).await?;
        }

        QuizService::new(self.db).refresh_level(level_id).await?;

        Ok(())
    }

    async fn ensure_level(&self, level_id: i32) -> Result<(), AppError> {
        if LevelRepository::new(self.db)
            .find_by_id(level_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Level not found".to_string()));
        }

        Ok(())
    }
}
