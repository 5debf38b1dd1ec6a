use sea_orm::DatabaseConnection;

use crate::server::{
    data::community::{CommunityChanges, CommunityRepository, NewCommunity},
    error::AppError,
    model::{
        community::{Community, CommunityParams},
        pagination::{PageRequest, Paginated},
    },
    util::storage::ImageStorage,
};

const IMAGE_FOLDER: &str = "communities";

pub struct CommunityService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> CommunityService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        request: PageRequest,
    ) -> Result<Paginated<Community>, AppError> {
        let (communities, total) = CommunityRepository::new(self.db)
            .get_paginated(search, request)
            .await?;

        Ok(Paginated::new(communities, total, request))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Community, AppError> {
        CommunityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Community not found".to_string()))
    }

    pub async fn create(&self, params: CommunityParams) -> Result<Community, AppError> {
        let (Some(name), Some(description)) = (params.name, params.description) else {
            return Err(AppError::BadRequest(
                "Name and description are required".to_string(),
            ));
        };

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = CommunityRepository::new(self.db)
            .create(NewCommunity {
                name,
                description,
                link: params.link.flatten(),
                image_url: image_url.clone(),
            })
            .await;

        self.storage
            .discard_on_error(image_url.as_deref(), result)
            .await
    }

    pub async fn update(&self, id: i32, params: CommunityParams) -> Result<Community, AppError> {
        let existing = self.get_by_id(id).await?;

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = CommunityRepository::new(self.db)
            .update(
                id,
                CommunityChanges {
                    name: params.name,
                    description: params.description,
                    link: params.link,
                    image_url: image_url.clone(),
                },
            )
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AppError::NotFound("Community not found".to_string()))
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

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let community = self.get_by_id(id).await?;

        CommunityRepository::new(self.db).delete(id).await?;
        if let Some(image_url) = &community.image_url {
            self.storage.delete(image_url).await?;
        }

        Ok(())
    }
}
