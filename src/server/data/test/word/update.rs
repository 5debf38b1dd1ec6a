use super::*;

/// Tests a description can be set and then cleared while other fields stay.
///
/// Expected: description set, then None, word and image unchanged
#[tokio::test]
async fn sets_and_clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Word)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_word(db, "Sekolah").await?;
    let repo = WordRepository::new(db);

    let updated = repo
        .update(stored.id, None, Some(Some("Tempat belajar".to_string())), None)
        .await?
        .unwrap();
    assert_eq!(updated.description.as_deref(), Some("Tempat belajar"));

    let cleared = repo.update(stored.id, None, Some(None), None).await?.unwrap();
    assert_eq!(cleared.description, None);
    assert_eq!(cleared.word, "Sekolah");
    assert_eq!(cleared.image_url, stored.image_url);

    Ok(())
}

/// Tests updating a missing word.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_word() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Word)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WordRepository::new(db)
        .update(3, Some("Baru".to_string()), None, None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
