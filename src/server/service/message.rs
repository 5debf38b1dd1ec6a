use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    model::{
        message::{CreateMessageParams, Message},
        pagination::{PageRequest, Paginated},
    },
};

/// Contact form inbox.
pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, AppError> {
        let message = MessageRepository::new(self.db).create(params).await?;

        tracing::info!("Received contact message {} from {}", message.id, message.email);

        Ok(message)
    }

    pub async fn get_paginated(
        &self,
        unread_only: bool,
        request: PageRequest,
    ) -> Result<Paginated<Message>, AppError> {
        let (messages, total) = MessageRepository::new(self.db)
            .get_paginated(unread_only, request)
            .await?;

        Ok(Paginated::new(messages, total, request))
    }

    /// Gets a message for an admin and marks it as read.
    pub async fn open(&self, id: i32) -> Result<Message, AppError> {
        self.set_read(id, true).await
    }

    pub async fn set_read(&self, id: i32, is_read: bool) -> Result<Message, AppError> {
        MessageRepository::new(self.db)
            .set_read(id, is_read)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MessageRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Message not found".to_string()));
        }

        Ok(())
    }
}
