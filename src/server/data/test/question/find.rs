use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests stored options that are not a string array surface as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_malformed_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let now = chrono::Utc::now();
    entity::question::ActiveModel {
        id: ActiveValue::Set(1),
        level_id: ActiveValue::Set(level.id),
        question: ActiveValue::Set("?".to_string()),
        correct_option: ActiveValue::Set("A".to_string()),
        options: ActiveValue::Set(serde_json::json!({ "a": 1 })),
        image_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await?;

    let result = QuestionRepository::new(db).find(level.id, 1).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests questions of a level come back in ordinal order.
///
/// Expected: 1, 2, 3
#[tokio::test]
async fn lists_level_questions_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    for id in [3, 1, 2] {
        factory::create_question(db, level.id, id).await?;
    }

    let questions = QuestionRepository::new(db).get_by_level(level.id).await?;

    assert_eq!(
        questions.iter().map(|q| q.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    Ok(())
}
