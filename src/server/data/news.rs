use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{news::News, pagination::PageRequest};

/// Fields of a news article to insert.
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// News changes; `None` leaves a column untouched.
#[derive(Default)]
pub struct NewsChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, news: NewNews) -> Result<News, DbErr> {
        let now = Utc::now();

        let entity = entity::news::ActiveModel {
            title: ActiveValue::Set(news.title),
            content: ActiveValue::Set(news.content),
            image_url: ActiveValue::Set(news.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let entity = entity::prelude::News::find_by_id(id).one(self.db).await?;

        Ok(entity.map(News::from_entity))
    }

    /// Gets one page of news, newest first, optionally filtered by title.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        request: PageRequest,
    ) -> Result<(Vec<News>, u64), DbErr> {
        let mut query = entity::prelude::News::find();

        if let Some(search) = search {
            query = query.filter(entity::news::Column::Title.contains(search));
        }

        let paginator = query
            .order_by_desc(entity::news::Column::CreatedAt)
            .order_by_desc(entity::news::Column::Id)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let news = paginator
            .fetch_page(request.page)
            .await?
            .into_iter()
            .map(News::from_entity)
            .collect();

        Ok((news, total))
    }

    pub async fn update(&self, id: i32, changes: NewsChanges) -> Result<Option<News>, DbErr> {
        let Some(model) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = changes.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(image_url) = changes.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(News::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::News::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::News::find().count(self.db).await
    }
}
