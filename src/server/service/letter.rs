use sea_orm::DatabaseConnection;

use crate::server::{
    data::letter::LetterRepository,
    error::AppError,
    model::{
        letter::{CreateLetterParams, Letter, UpdateLetterParams},
        pagination::{PageRequest, Paginated},
    },
    util::storage::ImageStorage,
};

const IMAGE_FOLDER: &str = "letters";

pub struct LetterService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> LetterService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        request: PageRequest,
    ) -> Result<Paginated<Letter>, AppError> {
        let (letters, total) = LetterRepository::new(self.db)
            .get_paginated(search, request)
            .await?;

        Ok(Paginated::new(letters, total, request))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Letter, AppError> {
        LetterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Letter not found".to_string()))
    }

    /// Creates a dictionary letter after checking it is not registered yet.
    pub async fn create(&self, params: CreateLetterParams) -> Result<Letter, AppError> {
        let repo = LetterRepository::new(self.db);

        if repo.find_by_letter(&params.letter).await?.is_some() {
            return Err(AppError::invalid("letter", "The letter has already been taken."));
        }

        let image_url = self.storage.store(IMAGE_FOLDER, &params.image).await?;
        let result = repo.create(params.letter, image_url.clone()).await;

        self.storage
            .discard_on_error(Some(&image_url), result)
            .await
    }

    /// Updates a letter; a replaced image is removed from storage.
    pub async fn update(&self, id: i32, params: UpdateLetterParams) -> Result<Letter, AppError> {
        let repo = LetterRepository::new(self.db);
        let existing = self.get_by_id(id).await?;

        if let Some(letter) = &params.letter {
            if repo
                .find_by_letter(letter)
                .await?
                .is_some_and(|other| other.id != id)
            {
                return Err(AppError::invalid("letter", "The letter has already been taken."));
            }
        }

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = repo
            .update(id, params.letter, image_url.clone())
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AppError::NotFound("Letter not found".to_string()))
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
        let letter = self.get_by_id(id).await?;

        LetterRepository::new(self.db).delete(id).await?;
        self.storage.delete(&letter.image_url).await?;

        Ok(())
    }
}
