use sea_orm::DatabaseConnection;

use crate::server::{
    data::word::WordRepository,
    error::AppError,
    model::{
        pagination::{PageRequest, Paginated},
        word::{CreateWordParams, UpdateWordParams, Word, WordFilter},
    },
    util::storage::ImageStorage,
};

const IMAGE_FOLDER: &str = "words";

pub struct WordService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> WordService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    pub async fn get_paginated(
        &self,
        filter: &WordFilter,
        request: PageRequest,
    ) -> Result<Paginated<Word>, AppError> {
        let (words, total) = WordRepository::new(self.db)
            .get_paginated(filter, request)
            .await?;

        Ok(Paginated::new(words, total, request))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Word, AppError> {
        WordRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Word not found".to_string()))
    }

    pub async fn create(&self, params: CreateWordParams) -> Result<Word, AppError> {
        let repo = WordRepository::new(self.db);

        if repo.find_by_word(&params.word).await?.is_some() {
            return Err(AppError::invalid("word", "The word has already been taken."));
        }

        let image_url = self.storage.store(IMAGE_FOLDER, &params.image).await?;

        let result = repo
            .create(params.word, params.description, image_url.clone())
            .await;

        self.storage
            .discard_on_error(Some(&image_url), result)
            .await
    }

    pub async fn update(&self, id: i32, params: UpdateWordParams) -> Result<Word, AppError> {
        let repo = WordRepository::new(self.db);
        let existing = self.get_by_id(id).await?;

        if let Some(word) = &params.word {
            if repo
                .find_by_word(word)
                .await?
                .is_some_and(|other| other.id != id)
            {
                return Err(AppError::invalid("word", "The word has already been taken."));
            }
        }

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = repo
            .update(id, params.word, params.description, image_url.clone())
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AppError::NotFound("Word not found".to_string()))
            });
        let updated = self
            .storage
            .discard_on_error(image_url.as_deref(), result)
            .await?;

        self.storage
            .delete_replaced(Some(&existing.image_url), Some(&updated.image_url))
            .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let word = self.get_by_id(id).await?;

        WordRepository::new(self.db).delete(id).await?;
        self.storage.delete(&word.image_url).await?;

        Ok(())
    }
}
