use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pagination::PageRequest,
    word::{Word, WordFilter},
};

pub struct WordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        word: String,
        description: Option<String>,
        image_url: String,
    ) -> Result<Word, DbErr> {
        let now = Utc::now();

        let entity = entity::word::ActiveModel {
            word: ActiveValue::Set(word),
            description: ActiveValue::Set(description),
            image_url: ActiveValue::Set(image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Word::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Word>, DbErr> {
        let entity = entity::prelude::Word::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Word::from_entity))
    }

    /// Exact, case-sensitive lookup used for the uniqueness check.
    pub async fn find_by_word(&self, word: &str) -> Result<Option<Word>, DbErr> {
        let entity = entity::prelude::Word::find()
            .filter(entity::word::Column::Word.eq(word))
            .one(self.db)
            .await?;

        Ok(entity.map(Word::from_entity))
    }

    /// Gets one page of words in alphabetical order.
    ///
    /// `filter.search` matches anywhere in the word, `filter.letter` only at its start.
    pub async fn get_paginated(
        &self,
        filter: &WordFilter,
        request: PageRequest,
    ) -> Result<(Vec<Word>, u64), DbErr> {
        let mut query = entity::prelude::Word::find();

        if let Some(search) = &filter.search {
            query = query.filter(entity::word::Column::Word.contains(search));
        }
        if let Some(letter) = filter.letter {
            query = query.filter(entity::word::Column::Word.starts_with(letter.to_string()));
        }

        let paginator = query
            .order_by_asc(entity::word::Column::Word)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        let words = paginator
            .fetch_page(request.page)
            .await?
            .into_iter()
            .map(Word::from_entity)
            .collect();

        Ok((words, total))
    }

    /// Updates a word.
    ///
    /// `description` of `Some(None)` clears the description.
    pub async fn update(
        &self,
        id: i32,
        word: Option<String>,
        description: Option<Option<String>>,
        image_url: Option<String>,
    ) -> Result<Option<Word>, DbErr> {
        let Some(model) = entity::prelude::Word::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(word) = word {
            active.word = ActiveValue::Set(word);
        }
        if let Some(description) = description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(image_url) = image_url {
            active.image_url = ActiveValue::Set(image_url);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Word::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Word::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Word::find().count(self.db).await
    }
}
