use super::*;

/// Tests deleting a question drops its answers and re-derives progress.
///
/// Expected: the remaining answered question completes the level
#[tokio::test]
async fn removes_answers_and_refreshes_progress() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 3).await?;
    let quiz = QuizService::new(db);

    quiz.submit_answer(&user, level.id, 1, "A").await?;
    quiz.submit_answer(&user, level.id, 2, "B").await?;

    let service = QuestionService::new(db, &storage);
    service.delete(level.id, 3).await?;

    let progress = quiz.get_progress(user.id, level.id).await?;
    assert_eq!(progress.status, ProgressStatus::Completed);
    assert_eq!(progress.total_questions, 2);
    assert_eq!(progress.score, 50);

    service.delete(level.id, 2).await?;

    let progress = quiz.get_progress(user.id, level.id).await?;
    assert_eq!(progress.correct_answers, 1);
    assert_eq!(progress.total_questions, 1);
    assert_eq!(progress.score, 100);

    Ok(())
}

/// Tests deleting a question removes its image file.
///
/// Expected: file no longer exists
#[tokio::test]
async fn deletes_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;
    let service = QuestionService::new(db, &storage);

    let question = service
        .create(
            level.id,
            CreateQuestionParams {
                image: Some(png()),
                ..params(None)
            },
        )
        .await?;
    let url = question.image_url.unwrap();
    assert!(stored_path(&root, &url).exists());

    service.delete(level.id, question.id).await?;

    assert!(!stored_path(&root, &url).exists());

    Ok(())
}

/// Tests deleting a missing question.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_question() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let level = factory::create_level(db).await?;

    let result = QuestionService::new(db, &storage).delete(level.id, 1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
