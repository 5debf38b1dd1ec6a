use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    event::{Event, EventFilter},
    pagination::PageRequest,
};

pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub image_url: Option<String>,
}

#[derive(Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
}

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, event: NewEvent) -> Result<Event, DbErr> {
        let now = Utc::now();

        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(event.title),
            description: ActiveValue::Set(event.description),
            location: ActiveValue::Set(event.location),
            event_date: ActiveValue::Set(event.event_date),
            image_url: ActiveValue::Set(event.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets one page of events ordered by the date they take place.
    ///
    /// # Arguments
    /// - `filter` - Optional title search and lower bound on the event date
    /// - `request` - Page number and size
    pub async fn get_paginated(
        &self,
        filter: &EventFilter,
        request: PageRequest,
    ) -> Result<(Vec<Event>, u64), DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(search) = &filter.search {
            query = query.filter(entity::event::Column::Title.contains(search));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::event::Column::EventDate.gte(from));
        }

        let paginator = query
            .order_by_asc(entity::event::Column::EventDate)
            .order_by_asc(entity::event::Column::Id)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let events = paginator
            .fetch_page(request.page)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect();

        Ok((events, total))
    }

    pub async fn update(&self, id: i32, changes: EventChanges) -> Result<Option<Event>, DbErr> {
        let Some(model) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(location) = changes.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(event_date) = changes.event_date {
            active.event_date = ActiveValue::Set(event_date);
        }
        if let Some(image_url) = changes.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Event::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Event::find().count(self.db).await
    }
}
