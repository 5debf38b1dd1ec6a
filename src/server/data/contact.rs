use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::{
    contact::{Contact, ContactParams},
    pagination::PageRequest,
};

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: ContactParams) -> Result<Contact, DbErr> {
        let now = Utc::now();

        let entity = entity::contact::ActiveModel {
            platform: ActiveValue::Set(params.platform),
            value: ActiveValue::Set(params.value),
            url: ActiveValue::Set(params.url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Contact::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Contact>, DbErr> {
        let entity = entity::prelude::Contact::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Contact::from_entity))
    }

    /// Gets one page of contact channels in creation order.
    pub async fn get_paginated(&self, request: PageRequest) -> Result<(Vec<Contact>, u64), DbErr> {
        let paginator = entity::prelude::Contact::find()
            .order_by_asc(entity::contact::Column::Id)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let contacts = paginator
            .fetch_page(request.page)
            .await?
            .into_iter()
            .map(Contact::from_entity)
            .collect();

        Ok((contacts, total))
    }

    /// Replaces every field of a contact channel.
    pub async fn update(&self, id: i32, params: ContactParams) -> Result<Option<Contact>, DbErr> {
        let Some(model) = entity::prelude::Contact::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.platform = ActiveValue::Set(params.platform);
        active.value = ActiveValue::Set(params.value);
        active.url = ActiveValue::Set(params.url);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Contact::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Contact::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
