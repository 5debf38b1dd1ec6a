use super::*;

/// Tests a letter is stored with its uploaded image.
///
/// Expected: image URL under /storage/letters and the file on disk
#[tokio::test]
async fn stores_letter_and_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Letter)
        .build()
        .await
        .unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let letter = LetterService::new(db, &storage)
        .create(CreateLetterParams {
            letter: "A".to_string(),
            image: png(),
        })
        .await?;

    assert_eq!(letter.letter, "A");
    assert!(letter.image_url.starts_with("/storage/letters/"));
    assert!(stored_path(&root, &letter.image_url).exists());

    Ok(())
}

/// Tests a letter can only exist once.
///
/// Expected: Err(AppError::Validation) on the letter field
#[tokio::test]
async fn rejects_duplicate_letter() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Letter)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    factory::create_letter(db, "B").await?;

    let result = LetterService::new(db, &storage)
        .create(CreateLetterParams {
            letter: "B".to_string(),
            image: png(),
        })
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.has("letter")),
        other => panic!("expected validation error, got {:?}", other.map(|l| l.id)),
    }

    Ok(())
}
