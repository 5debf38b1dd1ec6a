use super::*;

/// Tests the previous level is the greatest ID below the given one.
///
/// Expected: None for the first level, the nearest lower ID otherwise
#[tokio::test]
async fn finds_nearest_lower_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_level(db).await?;
    let second = factory::create_level(db).await?;
    let third = factory::create_level(db).await?;
    let repo = LevelRepository::new(db);

    repo.delete(second.id).await?;

    assert_eq!(repo.find_previous_id(first.id).await?, None);
    assert_eq!(repo.find_previous_id(third.id).await?, Some(first.id));

    Ok(())
}
