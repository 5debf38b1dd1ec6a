use super::*;

/// Tests a new correct option must be one of the stored options.
///
/// Expected: Err(AppError::Validation) on correct_option
#[tokio::test]
async fn validates_against_stored_options() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let (level, _) = create_level_with_questions(db, 1).await?;

    let result = QuestionService::new(db, &storage)
        .update(
            level.id,
            1,
            UpdateQuestionParams {
                question: None,
                options: None,
                correct_option: Some("D".to_string()),
                image: None,
            },
        )
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.has("correct_option")),
        other => panic!("expected validation error, got {:?}", other.map(|q| q.id)),
    }

    Ok(())
}

/// Tests replacing options together with the correct option.
///
/// Expected: updated options and correct option, question text kept
#[tokio::test]
async fn replaces_options() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let (level, questions) = create_level_with_questions(db, 1).await?;

    let updated = QuestionService::new(db, &storage)
        .update(
            level.id,
            1,
            UpdateQuestionParams {
                question: None,
                options: Some(vec!["X".to_string(), "Y".to_string()]),
                correct_option: Some("Y".to_string()),
                image: None,
            },
        )
        .await?;

    assert_eq!(updated.options, vec!["X", "Y"]);
    assert_eq!(updated.correct_option, "Y");
    assert_eq!(updated.question, questions[0].question);

    Ok(())
}

/// Tests a replaced question image is removed from storage.
///
/// Expected: old file gone, new file present
#[tokio::test]
async fn deletes_replaced_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let service = QuestionService::new(db, &storage);

    let created = service
        .create(
            level.id,
            CreateQuestionParams {
                image: Some(png()),
                ..params(None)
            },
        )
        .await?;
    let old_url = created.image_url.clone().unwrap();

    let updated = service
        .update(
            level.id,
            created.id,
            UpdateQuestionParams {
                question: None,
                options: None,
                correct_option: None,
                image: Some(png()),
            },
        )
        .await?;
    let new_url = updated.image_url.unwrap();

    assert_ne!(old_url, new_url);
    assert!(!stored_path(&root, &old_url).exists());
    assert!(stored_path(&root, &new_url).exists());

    Ok(())
}
