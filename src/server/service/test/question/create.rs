use super::*;

/// Tests questions without an explicit ID get the next ordinal of their level.
///
/// Expected: IDs 1 then 2, independent of other levels
#[tokio::test]
async fn assigns_next_ordinal() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let (other, _) = create_level_with_questions(db, 3).await?;
    let level = factory::create_level(db).await?;
    let service = QuestionService::new(db, &storage);

    let first = service.create(level.id, params(None)).await?;
    let second = service.create(level.id, params(None)).await?;
    let next_in_other = service.create(other.id, params(None)).await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(next_in_other.id, 4);

    Ok(())
}

/// Tests an explicit ordinal already used in the level is rejected.
///
/// Expected: Err(AppError::Validation) on the id field
#[tokio::test]
async fn rejects_taken_ordinal() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let (level, _) = create_level_with_questions(db, 2).await?;

    let result = QuestionService::new(db, &storage)
        .create(level.id, params(Some(2)))
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.has("id")),
        other => panic!("expected validation error, got {:?}", other.map(|q| q.id)),
    }

    Ok(())
}

/// Tests adding a question re-derives progress of players who completed the level.
///
/// Expected: completed 2/2 becomes in_progress 2/3 with a 67% score
#[tokio::test]
async fn refreshes_existing_progress() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 2).await?;
    let quiz = QuizService::new(db);

    quiz.submit_answer(&user, level.id, 1, "A").await?;
    let before = quiz.submit_answer(&user, level.id, 2, "A").await?;
    assert_eq!(before.progress.status, ProgressStatus::Completed);

    QuestionService::new(db, &storage)
        .create(level.id, params(None))
        .await?;

    let after = quiz.get_progress(user.id, level.id).await?;
    assert_eq!(after.status, ProgressStatus::InProgress);
    assert_eq!(after.total_questions, 3);
    assert_eq!(after.score, 67);

    Ok(())
}

/// Tests creating a question in a missing level.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_level() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let result = QuestionService::new(db, &storage)
        .create(99, params(None))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
