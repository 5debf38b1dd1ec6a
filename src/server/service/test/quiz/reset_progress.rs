use super::*;

/// Tests resetting removes answers and progress so the level starts over.
///
/// Expected: zeroed progress and a fresh first answer afterwards
#[tokio::test]
async fn clears_answers_and_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let (level, _) = create_level_with_questions(db, 2).await?;
    let quiz = QuizService::new(db);

    quiz.submit_answer(&user, level.id, 1, "A").await?;
    quiz.submit_answer(&user, level.id, 2, "A").await?;

    quiz.reset_progress(user.id, level.id).await?;

    let progress = quiz.get_progress(user.id, level.id).await?;
    assert_eq!(progress.score, 0);
    assert!(progress.updated_at.is_none());

    let result = quiz.submit_answer(&user, level.id, 1, "A").await?;
    assert_eq!(result.progress.correct_answers, 1);
    assert_eq!(result.progress.status, ProgressStatus::InProgress);

    Ok(())
}
