use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        level::{LevelChanges, LevelRepository, NewLevel},
        question::QuestionRepository,
    },
    error::AppError,
    model::{
        level::{LevelParams, LevelSummary},
        pagination::{PageRequest, Paginated},
    },
    util::storage::ImageStorage,
};

const IMAGE_FOLDER: &str = "levels";

pub struct LevelService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> LevelService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<Paginated<LevelSummary>, AppError> {
        let (levels, total) = LevelRepository::new(self.db).get_paginated(request).await?;

        Ok(Paginated::new(levels, total, request))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<LevelSummary, AppError> {
        LevelRepository::new(self.db)
            .find_summary(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Level not found".to_string()))
    }

    pub async fn create(&self, params: LevelParams) -> Result<LevelSummary, AppError> {
        let (Some(name), Some(title)) = (params.name, params.title) else {
            return Err(AppError::BadRequest("Name and title are required".to_string()));
        };

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = LevelRepository::new(self.db)
            .create(NewLevel {
                name,
                title,
                description: params.description.flatten(),
                image_url: image_url.clone(),
            })
            .await;
        let level = self
            .storage
            .discard_on_error(image_url.as_deref(), result)
            .await?;

        Ok(LevelSummary {
            level,
            total_questions: 0,
        })
    }

    pub async fn update(&self, id: i32, params: LevelParams) -> Result<LevelSummary, AppError> {
        let existing = self.get_by_id(id).await?;

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = LevelRepository::new(self.db)
            .update(
                id,
                LevelChanges {
                    name: params.name,
                    title: params.title,
                    description: params.description,
                    image_url: image_url.clone(),
                },
            )
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AppError::NotFound("Level not found".to_string()))
            });
        let level = self
            .storage
            .discard_on_error(image_url.as_deref(), result)
            .await?;

        self.storage
            .delete_replaced(
                existing.level.image_url.as_deref(),
                level.image_url.as_deref(),
            )
            .await?;

        Ok(LevelSummary {
            level,
            total_questions: existing.total_questions,
        })
    }

    /// Deletes a level with its questions, answers and progress, then removes the
    /// level's and questions' images from storage.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let summary = self.get_by_id(id).await?;

        let mut images: Vec<String> = QuestionRepository::new(self.db)
            .get_by_level(id)
            .await?
            .into_iter()
            .filter_map(|question| question.image_url)
            .collect();
        images.extend(summary.level.image_url);

        LevelRepository::new(self.db).delete(id).await?;

        for image in &images {
            self.storage.delete(image).await?;
        }

        tracing::info!("Deleted level {} with {} images", id, images.len());

        Ok(())
    }
}
