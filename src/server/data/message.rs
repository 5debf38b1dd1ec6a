use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    message::{CreateMessageParams, Message},
    pagination::PageRequest,
};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a contact form submission as unread.
    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            subject: ActiveValue::Set(params.subject),
            body: ActiveValue::Set(params.body),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::Message::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Message::from_entity))
    }

    /// Gets one page of messages, newest first.
    ///
    /// # Arguments
    /// - `unread_only` - Only return messages that have not been read
    /// - `request` - Page number and size
    pub async fn get_paginated(
        &self,
        unread_only: bool,
        request: PageRequest,
    ) -> Result<(Vec<Message>, u64), DbErr> {
        let mut query = entity::prelude::Message::find();

        if unread_only {
            query = query.filter(entity::message::Column::IsRead.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let messages = paginator
            .fetch_page(request.page)
            .await?
            .into_iter()
            .map(Message::from_entity)
            .collect();

        Ok((messages, total))
    }

    /// Sets the read flag of a message.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - The updated message
    /// - `Ok(None)` - No message with that ID
    pub async fn set_read(&self, id: i32, is_read: bool) -> Result<Option<Message>, DbErr> {
        let Some(model) = entity::prelude::Message::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if model.is_read == is_read {
            return Ok(Some(Message::from_entity(model)));
        }

        let mut active = model.into_active_model();
        active.is_read = ActiveValue::Set(is_read);

        Ok(Some(Message::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_unread(&self) -> Result<u64, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }
}
