use super::*;

/// Tests an untouched level reports zeroed progress with the level's total.
///
/// Expected: in_progress, score 0, total 4, no update timestamp
#[tokio::test]
async fn returns_zeroed_progress_for_new_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (level, _) = create_level_with_questions(db, 4).await?;

    let progress = QuizService::new(db).get_progress(user.id, level.id).await?;

    assert_eq!(progress.status, ProgressStatus::InProgress);
    assert_eq!(progress.score, 0);
    assert_eq!(progress.correct_answers, 0);
    assert_eq!(progress.total_questions, 4);
    assert!(progress.updated_at.is_none());

    Ok(())
}

/// Tests progress of a missing level is not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = QuizService::new(db).get_progress(user.id, 42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing a user's progress returns only their rows in level order.
///
/// Expected: two rows for the user, none of another user's
#[tokio::test]
async fn lists_progress_of_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_level(db).await?;
    let second = factory::create_level(db).await?;

    user_progress::create_completed_progress(db, user.id, first.id, 1).await?;
    user_progress::create_progress(db, user.id, second.id, "in_progress", 0, 3).await?;
    user_progress::create_completed_progress(db, other.id, first.id, 1).await?;

    let progress = QuizService::new(db).list_progress(user.id).await?;

    assert_eq!(
        progress.iter().map(|p| p.level_id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert!(progress.iter().all(|p| p.user_id == user.id));

    Ok(())
}
