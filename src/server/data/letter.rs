use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{letter::Letter, pagination::PageRequest};

pub struct LetterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LetterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a letter with its sign image.
    ///
    /// # Returns
    /// - `Ok(Letter)` - The created letter
    /// - `Err(DbErr)` - Database error, including a unique violation on `letter`
    pub async fn create(&self, letter: String, image_url: String) -> Result<Letter, DbErr> {
        let now = Utc::now();

        let entity = entity::letter::ActiveModel {
            letter: ActiveValue::Set(letter),
            image_url: ActiveValue::Set(image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Letter::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Letter>, DbErr> {
        let entity = entity::prelude::Letter::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Letter::from_entity))
    }

    /// Finds the entry for an already normalized (upper-case) letter.
    pub async fn find_by_letter(&self, letter: &str) -> Result<Option<Letter>, DbErr> {
        let entity = entity::prelude::Letter::find()
            .filter(entity::letter::Column::Letter.eq(letter))
            .one(self.db)
            .await?;

        Ok(entity.map(Letter::from_entity))
    }

    /// Gets one page of letters in alphabetical order.
    ///
    /// # Returns
    /// - `Ok((letters, total))` - Letters of the requested page and the total matching count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        request: PageRequest,
    ) -> Result<(Vec<Letter>, u64), DbErr> {
        let mut query = entity::prelude::Letter::find();

        if let Some(search) = search {
            query = query.filter(entity::letter::Column::Letter.contains(search));
        }

        let paginator = query
            .order_by_asc(entity::letter::Column::Letter)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let letters = paginator
            .fetch_page(request.page)
            .await?
            .into_iter()
            .map(Letter::from_entity)
            .collect();

        Ok((letters, total))
    }

    /// Updates the letter and/or its image URL.
    ///
    /// # Returns
    /// - `Ok(Some(Letter))` - The updated letter
    /// - `Ok(None)` - No letter with that ID
    pub async fn update(
        &self,
        id: i32,
        letter: Option<String>,
        image_url: Option<String>,
    ) -> Result<Option<Letter>, DbErr> {
        let Some(model) = entity::prelude::Letter::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(letter) = letter {
            active.letter = ActiveValue::Set(letter);
        }
        if let Some(image_url) = image_url {
            active.image_url = ActiveValue::Set(image_url);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Letter::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Letter::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Letter::find().count(self.db).await
    }
}
