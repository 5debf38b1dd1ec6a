use super::*;

/// Tests every level is returned in play order with its question count.
///
/// Expected: two levels with 3 and 0 questions
#[tokio::test]
async fn includes_question_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .with_table(entity::prelude::Question)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = create_level_with_questions(db, 3).await?;
    let second = factory::create_level(db).await?;

    let levels = LevelRepository::new(db).get_all().await?;

    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].level.id, first.id);
    assert_eq!(levels[0].total_questions, 3);
    assert_eq!(levels[1].level.id, second.id);
    assert_eq!(levels[1].total_questions, 0);

    Ok(())
}
