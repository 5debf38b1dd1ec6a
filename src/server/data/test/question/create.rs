use super::*;

/// Tests options survive the JSON column.
///
/// Expected: stored options read back in order
#[tokio::test]
async fn stores_options_as_json() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let repo = QuestionRepository::new(db);

    repo.create(NewQuestion {
        id: 1,
        level_id: level.id,
        question: "Huruf apa ini?".to_string(),
        options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        correct_option: "B".to_string(),
        image_url: None,
    })
    .await?;

    let question = repo.find(level.id, 1).await?.unwrap();
    assert_eq!(question.options, vec!["A", "B", "C"]);
    assert_eq!(question.correct_option, "B");

    Ok(())
}

/// Tests the same ordinal may be used in different levels but not twice in one.
///
/// Expected: second level accepts ordinal 1, first level rejects it
#[tokio::test]
async fn ordinal_is_unique_per_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = create_level_with_questions(db, 1).await?;
    let second = factory::create_level(db).await?;
    let repo = QuestionRepository::new(db);

    let new_question = |level_id| NewQuestion {
        id: 1,
        level_id,
        question: "?".to_string(),
        options: vec!["A".to_string(), "B".to_string()],
        correct_option: "A".to_string(),
        image_url: None,
    };

    assert!(repo.create(new_question(second.id)).await.is_ok());
    assert!(repo.create(new_question(first.id)).await.is_err());

    Ok(())
}
