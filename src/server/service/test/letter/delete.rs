use super::*;

/// Tests deleting a letter removes its image file.
///
/// Expected: letter gone and file removed
#[tokio::test]
async fn removes_letter_and_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Letter)
        .build()
        .await
        .unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();
    let service = LetterService::new(db, &storage);

    let letter = service
        .create(CreateLetterParams {
            letter: "F".to_string(),
            image: png(),
        })
        .await?;

    service.delete(letter.id).await?;

    assert!(matches!(
        service.get_by_id(letter.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(!stored_path(&root, &letter.image_url).exists());

    Ok(())
}

/// Tests deleting a missing letter.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_letter() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Letter)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let result = LetterService::new(db, &storage).delete(7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
