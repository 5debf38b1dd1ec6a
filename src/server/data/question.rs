//! Question data repository.
//!
//! Questions are keyed by `(id, level_id)` where `id` is the question's ordinal inside
//! its level. Options are stored as a JSON array of strings.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::question::Question;

pub struct NewQuestion {
    pub id: i32,
    pub level_id: i32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: String,
    pub image_url: Option<String>,
}

#[derive(Default)]
pub struct QuestionChanges {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_option: Option<String>,
    pub image_url: Option<String>,
}

fn to_domain(entity: entity::question::Model) -> Result<Question, DbErr> {
    Question::from_entity(entity).map_err(|e| DbErr::Custom(e.to_string()))
}

pub struct QuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Next free ordinal in a level: one past the highest, or 1 for an empty level.
    pub async fn next_id(&self, level_id: i32) -> Result<i32, DbErr> {
        let last = entity::prelude::Question::find()
            .filter(entity::question::Column::LevelId.eq(level_id))
            .order_by_desc(entity::question::Column::Id)
            .one(self.db)
            .await?;

        Ok(last.map_or(1, |question| question.id + 1))
    }

    /// Inserts a question.
    ///
    /// # Returns
    /// - `Ok(Question)` - The created question
    /// - `Err(DbErr)` - Database error, including a primary key violation when the
    ///   ordinal is already used in the level
    pub async fn create(&self, question: NewQuestion) -> Result<Question, DbErr> {
        let now = Utc::now();

        let entity = entity::question::ActiveModel {
            id: ActiveValue::Set(question.id),
            level_id: ActiveValue::Set(question.level_id),
            question: ActiveValue::Set(question.question),
            correct_option: ActiveValue::Set(question.correct_option),
            options: ActiveValue::Set(serde_json::json!(question.options)),
            image_url: ActiveValue::Set(question.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        to_domain(entity)
    }

    pub async fn find(&self, level_id: i32, id: i32) -> Result<Option<Question>, DbErr> {
        let entity = entity::prelude::Question::find_by_id((id, level_id))
            .one(self.db)
            .await?;

        entity.map(to_domain).transpose()
    }

    /// Gets every question of a level in ordinal order.
    pub async fn get_by_level(&self, level_id: i32) -> Result<Vec<Question>, DbErr> {
        entity::prelude::Question::find()
            .filter(entity::question::Column::LevelId.eq(level_id))
            .order_by_asc(entity::question::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    pub async fn update(
        &self,
        level_id: i32,
        id: i32,
        changes: QuestionChanges,
    ) -> Result<Option<Question>, DbErr> {
        let Some(model) = entity::prelude::Question::find_by_id((id, level_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(question) = changes.question {
            active.question = ActiveValue::Set(question);
        }
        if let Some(options) = changes.options {
            active.options = ActiveValue::Set(serde_json::json!(options));
        }
        if let Some(correct_option) = changes.correct_option {
            active.correct_option = ActiveValue::Set(correct_option);
        }
        if let Some(image_url) = changes.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(to_domain(active.update(self.db).await?)?))
    }

    pub async fn delete(&self, level_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Question::delete_by_id((id, level_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_by_level(&self, level_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Question::find()
            .filter(entity::question::Column::LevelId.eq(level_id))
            .count(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Question::find().count(self.db).await
    }
}
