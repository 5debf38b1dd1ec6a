use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    level::{Level, LevelSummary},
    pagination::PageRequest,
};

pub struct NewLevel {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Level changes. `description` of `Some(None)` clears the description.
#[derive(Default)]
pub struct LevelChanges {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub image_url: Option<String>,
}

pub struct LevelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, level: NewLevel) -> Result<Level, DbErr> {
        let now = Utc::now();

        let entity = entity::level::ActiveModel {
            name: ActiveValue::Set(level.name),
            title: ActiveValue::Set(level.title),
            description: ActiveValue::Set(level.description),
            image_url: ActiveValue::Set(level.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Level::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Level>, DbErr> {
        let entity = entity::prelude::Level::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Level::from_entity))
    }

    /// Gets a level together with its question count.
    pub async fn find_summary(&self, id: i32) -> Result<Option<LevelSummary>, DbErr> {
        match self.find_by_id(id).await? {
            Some(level) => Ok(Some(self.summarize(level).await?)),
            None => Ok(None),
        }
    }

    /// Gets one page of levels in play order (ascending ID) with question counts.
    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<LevelSummary>, u64), DbErr> {
        let paginator = entity::prelude::Level::find()
            .order_by_asc(entity::level::Column::Id)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let mut levels = Vec::new();
        for model in paginator.fetch_page(request.page).await? {
            levels.push(self.summarize(Level::from_entity(model)).await?);
        }

        Ok((levels, total))
    }

    /// Gets every level in play order with question counts.
    pub async fn get_all(&self) -> Result<Vec<LevelSummary>, DbErr> {
        let models = entity::prelude::Level::find()
            .order_by_asc(entity::level::Column::Id)
            .all(self.db)
            .await?;

        let mut levels = Vec::with_capacity(models.len());
        for model in models {
            levels.push(self.summarize(Level::from_entity(model)).await?);
        }

        Ok(levels)
    }

    /// Gets the ID of the level played right before `id`, if any.
    ///
    /// Levels are played in ascending ID order, so this is the greatest ID below `id`.
    pub async fn find_previous_id(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let previous = entity::prelude::Level::find()
            .filter(entity::level::Column::Id.lt(id))
            .order_by_desc(entity::level::Column::Id)
            .one(self.db)
            .await?;

        Ok(previous.map(|level| level.id))
    }

    pub async fn update(&self, id: i32, changes: LevelChanges) -> Result<Option<Level>, DbErr> {
        let Some(model) = entity::prelude::Level::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(name) = changes.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(image_url) = changes.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Level::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a level. Questions, answers and progress go with it by cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Level::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Level::find().count(self.db).await
    }

    async fn summarize(&self, level: Level) -> Result<LevelSummary, DbErr> {
        let total_questions = entity::prelude::Question::find()
            .filter(entity::question::Column::LevelId.eq(level.id))
            .count(self.db)
            .await?;

        Ok(LevelSummary {
            level,
            total_questions,
        })
    }
}
