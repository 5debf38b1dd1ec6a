use super::*;

/// Tests the first ordinal of an empty level is 1.
///
/// Expected: 1
#[tokio::test]
async fn starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;

    assert_eq!(QuestionRepository::new(db).next_id(level.id).await?, 1);

    Ok(())
}

/// Tests the next ordinal follows the highest one, leaving gaps alone.
///
/// Expected: 8 after questions 1 and 7
#[tokio::test]
async fn follows_highest_ordinal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    factory::create_question(db, level.id, 1).await?;
    factory::create_question(db, level.id, 7).await?;

    assert_eq!(QuestionRepository::new(db).next_id(level.id).await?, 8);

    Ok(())
}
