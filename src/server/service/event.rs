use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::{EventChanges, EventRepository, NewEvent},
    error::AppError,
    model::{
        event::{Event, EventFilter, EventParams},
        pagination::{PageRequest, Paginated},
    },
    util::storage::ImageStorage,
};

const IMAGE_FOLDER: &str = "events";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ImageStorage,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ImageStorage) -> Self {
        Self { db, storage }
    }

    pub async fn get_paginated(
        &self,
        filter: &EventFilter,
        request: PageRequest,
    ) -> Result<Paginated<Event>, AppError> {
        let (events, total) = EventRepository::new(self.db)
            .get_paginated(filter, request)
            .await?;

        Ok(Paginated::new(events, total, request))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    pub async fn create(&self, params: EventParams) -> Result<Event, AppError> {
        let (Some(title), Some(description), Some(location), Some(event_date)) = (
            params.title,
            params.description,
            params.location,
            params.event_date,
        ) else {
            return Err(AppError::BadRequest(
                "Title, description, location and event date are required".to_string(),
            ));
        };

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = EventRepository::new(self.db)
            .create(NewEvent {
                title,
                description,
                location,
                event_date,
                image_url: image_url.clone(),
            })
            .await;

        self.storage
            .discard_on_error(image_url.as_deref(), result)
            .await
    }

    pub async fn update(&self, id: i32, params: EventParams) -> Result<Event, AppError> {
        let existing = self.get_by_id(id).await?;

        let image_url = match &params.image {
            Some(image) => Some(self.storage.store(IMAGE_FOLDER, image).await?),
            None => None,
        };

        let result = EventRepository::new(self.db)
            .update(
                id,
                EventChanges {
                    title: params.title,
                    description: params.description,
                    location: params.location,
                    event_date: params.event_date,
                    image_url: image_url.clone(),
                },
            )
            .await
            .map_err(AppError::from)
            .and_then(|updated| {
                updated.ok_or_else(|| AppError::NotFound("Event not found".to_string()))
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
        let event = self.get_by_id(id).await?;

        EventRepository::new(self.db).delete(id).await?;
        if let Some(image_url) = &event.image_url {
            self.storage.delete(image_url).await?;
        }

        Ok(())
    }
}
