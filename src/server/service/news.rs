use sea_orm::DatabaseConnection;

use crate::server::{
    data::news::{NewNews, NewsChanges, NewsRepository},
    error::AppError,
    model::{
        news::{News, NewsParams},
        pagination::{PageRequest, Paginated},
    },
    util::storage::ImageStorage,
};

const IMAGE_FOLDER: &str = "news";

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        request: PageRequest,
    ) -> Result<Paginated<News>, AppError> {
        let (news, total) = NewsRepository::new(self.db)
            .get_paginated(search, request)
            .await?;

        Ok(Paginated::new(news, total, request))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<News, AppError> {
        NewsRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))
    }

    /// Creates a news article. Title and content are guaranteed by `NewsParams::from_form`.
    pub async fn create(&self, params: NewsParams) -> Result<News, AppError> {
        let (Some(title), Some(content)) = (params.title, params.content) else {
            return Err(AppError::BadRequest(
                "Title and content are required".to_string(),
            ));
        };

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = NewsRepository::new(self.db)
            .create(NewNews {
                title,
                content,
                image_url: image_url.clone(),
            })
            .await;

        self.storage
            .discard_on_error(image_url.as_deref(), result)
            .await
    }

    pub async fn update(&self, id: i32, params: NewsParams) -> Result<News, AppError> {
        let existing = self.get_by_id(id).await?;

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = NewsRepository::new(self.db)
            .update(
                id,
                NewsChanges {
                    title: params.title,
                    content: params.content,
                    image_url: image_url.clone(),
                },
            )
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AppError::NotFound("News not found".to_string()))
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
        let news = self.get_by_id(id).await?;

        NewsRepository::new(self.db).delete(id).await?;
        if let Some(image_url) = &news.image_url {
            self.storage.delete(image_url).await?;
        }

        Ok(())
    }
}
