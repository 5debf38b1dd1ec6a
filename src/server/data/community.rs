use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{community::Community, pagination::PageRequest};

pub struct NewCommunity {
    pub name: String,
    pub description: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

/// Community changes. `link` of `Some(None)` clears the link.
#[derive(Default)]
pub struct CommunityChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<Option<String>>,
    pub image_url: Option<String>,
}

pub struct CommunityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommunityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, community: NewCommunity) -> Result<Community, DbErr> {
        let now = Utc::now();

        let entity = entity::community::ActiveModel {
            name: ActiveValue::Set(community.name),
            description: ActiveValue::Set(community.description),
            link: ActiveValue::Set(community.link),
            image_url: ActiveValue::Set(community.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Community::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Community>, DbErr> {
        let entity = entity::prelude::Community::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Community::from_entity))
    }

    /// Gets one page of communities ordered by name.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        request: PageRequest,
    ) -> Result<(Vec<Community>, u64), DbErr> {
        let mut query = entity::prelude::Community::find();

        if let Some(search) = search {
            query = query.filter(entity::community::Column::Name.contains(search));
        }

        let paginator = query
            .order_by_asc(entity::community::Column::Name)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let communities = paginator
            .fetch_page(request.page)
            .await?
            .into_iter()
            .map(Community::from_entity)
            .collect();

        Ok((communities, total))
    }

    pub async fn update(
        &self,
        id: i32,
        changes: CommunityChanges,
    ) -> Result<Option<Community>, DbErr> {
        let Some(model) = entity::prelude::Community::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(link) = changes.link {
            active.link = ActiveValue::Set(link);
        }
        if let Some(image_url) = changes.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Community::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Community::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Community::find().count(self.db).await
    }
}
