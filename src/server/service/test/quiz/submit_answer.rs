use super::*;

/// Tests a correct answer is scored against the level's total question count.
///
/// Expected: Ok with is_correct, in_progress status and a 33% score for 1 of 3
#[tokio::test]
async fn scores_correct_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 3).await?;

    let result = QuizService::new(db)
        .submit_answer(&user, level.id, 1, "A")
        .await?;

    assert!(result.is_correct);
    assert_eq!(result.correct_option, "A");
    assert_eq!(result.progress.status, ProgressStatus::InProgress);
    assert_eq!(result.progress.correct_answers, 1);
    assert_eq!(result.progress.total_questions, 3);
    assert_eq!(result.progress.score, 33);

    Ok(())
}

/// Tests answering every question completes the level with a rounded score.
///
/// Expected: completed status with 67% for 2 of 3 correct
#[tokio::test]
async fn completes_level_when_every_question_answered() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 3).await?;
    let quiz = QuizService::new(db);

    quiz.submit_answer(&user, level.id, 1, "A").await?;
    quiz.submit_answer(&user, level.id, 2, "B").await?;
    let result = quiz.submit_answer(&user, level.id, 3, "A").await?;

    assert_eq!(result.progress.status, ProgressStatus::Completed);
    assert_eq!(result.progress.correct_answers, 2);
    assert_eq!(result.progress.score, 67);

    Ok(())
}

/// Tests re-answering a question replaces the earlier answer.
///
/// Expected: a wrong answer corrected later counts once as correct
#[tokio::test]
async fn re_answering_replaces_previous_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 2).await?;
    let quiz = QuizService::new(db);

    let first = quiz.submit_answer(&user, level.id, 1, "B").await?;
    assert!(!first.is_correct);
    assert_eq!(first.progress.correct_answers, 0);

    let second = quiz.submit_answer(&user, level.id, 1, "A").await?;
    assert!(second.is_correct);
    assert_eq!(second.progress.correct_answers, 1);
    assert_eq!(second.progress.status, ProgressStatus::InProgress);

    let again = quiz.submit_answer(&user, level.id, 1, "A").await?;
    assert_eq!(again.progress.correct_answers, 1);
    assert_eq!(again.progress.score, 50);

    Ok(())
}

/// Tests answers are trimmed before comparison.
///
/// Expected: " A " is accepted as the correct option
#[tokio::test]
async fn trims_submitted_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 1).await?;

    let result = QuizService::new(db)
        .submit_answer(&user, level.id, 1, "  A ")
        .await?;

    assert!(result.is_correct);
    assert_eq!(result.progress.status, ProgressStatus::Completed);
    assert_eq!(result.progress.score, 100);

    Ok(())
}

/// Tests an answer that is not one of the options is rejected.
///
/// Expected: Err(AppError::Validation) on the answer field
#[tokio::test]
async fn rejects_answer_not_offered() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 1).await?;

    let result = QuizService::new(db)
        .submit_answer(&user, level.id, 1, "Z")
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.has("answer")),
        other => panic!("expected validation error, got {:?}", other.map(|r| r.is_correct)),
    }

    Ok(())
}

/// Tests answering in a locked level is forbidden.
///
/// Expected: Err(AuthError::LevelLocked) for the second level
#[tokio::test]
async fn rejects_answer_in_locked_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    create_level_with_questions(db, 1).await?;
    let (second, _) = create_level_with_questions(db, 1).await?;

    let result = QuizService::new(db)
        .submit_answer(&user, second.id, 1, "A")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::LevelLocked { level_id, .. })) if level_id == second.id
    ));

    Ok(())
}

/// Tests a missing question yields not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 1).await?;

    let result = QuizService::new(db)
        .submit_answer(&user, level.id, 9, "A")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
