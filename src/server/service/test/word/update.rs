use super::*;

/// Tests renaming to a word used by another entry is rejected.
///
/// Expected: Err(AppError::Validation) on the word field
#[tokio::test]
async fn rejects_word_of_other_entry() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Word)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    factory::create_word(db, "Minum").await?;
    let tidur = factory::create_word(db, "Tidur").await?;

    let result = WordService::new(db, &storage)
        .update(
            tidur.id,
            UpdateWordParams {
                word: Some("Minum".to_string()),
                description: None,
                image: None,
            },
        )
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.has("word")),
        other => panic!("expected validation error, got {:?}", other.map(|w| w.id)),
    }

    Ok(())
}

/// Tests an entry may keep its own word and differ from another only by case.
///
/// Expected: "minum" saved while "Minum" exists
#[tokio::test]
async fn renames_to_case_variant_of_other_entry() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Word)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    factory::create_word(db, "Minum").await?;
    let tidur = factory::create_word(db, "Tidur").await?;

    let updated = WordService::new(db, &storage)
        .update(
            tidur.id,
            UpdateWordParams {
                word: Some("minum".to_string()),
                description: None,
                image: None,
            },
        )
        .await?;

    assert_eq!(updated.word, "minum");
    assert_eq!(updated.image_url, tidur.image_url);

    Ok(())
}

/// Tests a blank description clears it and a new image replaces the old file.
///
/// Expected: description None, new image stored, old image removed
#[tokio::test]
async fn clears_description_and_replaces_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Word)
        .build()
        .await
        .unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();
    let service = WordService::new(db, &storage);

    let created = service
        .create(CreateWordParams {
            word: "Rumah".to_string(),
            description: Some("Tempat tinggal".to_string()),
            image: png(),
        })
        .await?;

    let updated = service
        .update(
            created.id,
            UpdateWordParams {
                word: None,
                description: Some(None),
                image: Some(png()),
            },
        )
        .await?;

    assert_eq!(updated.word, "Rumah");
    assert_eq!(updated.description, None);
    assert_ne!(updated.image_url, created.image_url);
    assert!(!stored_path(&root, &created.image_url).exists());
    assert!(stored_path(&root, &updated.image_url).exists());

    Ok(())
}

/// Tests updating a word that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_word() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Word)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let result = WordService::new(db, &storage)
        .update(
            99,
            UpdateWordParams {
                word: Some("Hilang".to_string()),
                description: None,
                image: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
