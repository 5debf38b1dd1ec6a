use super::*;

/// Tests lookup by the letter itself.
///
/// Expected: Some for a stored letter, None otherwise
#[tokio::test]
async fn finds_stored_letter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Letter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_letter(db, "M").await?;
    let repo = LetterRepository::new(db);

    assert_eq!(repo.find_by_letter("M").await?.map(|l| l.id), Some(stored.id));
    assert!(repo.find_by_letter("N").await?.is_none());

    Ok(())
}
