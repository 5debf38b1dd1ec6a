use super::*;

/// Tests the first level is playable without any progress.
///
/// Expected: Ok(true)
#[tokio::test]
async fn first_level_is_unlocked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let level = factory::create_level(db).await?;

    assert!(QuizService::new(db).is_level_unlocked(&user, level.id).await?);

    Ok(())
}

/// Tests a level unlocks once the preceding one is completed.
///
/// Expected: locked while previous is in progress, unlocked once completed
#[tokio::test]
async fn unlocks_after_previous_level_completed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_level(db).await?;
    let second = factory::create_level(db).await?;
    let quiz = QuizService::new(db);
    let player = User::from_entity(user.clone());

    user_progress::create_progress(db, user.id, first.id, "in_progress", 1, 2).await?;
    assert!(!quiz.is_level_unlocked(&player, second.id).await?);

    quiz.reset_progress(user.id, first.id).await?;
    user_progress::create_completed_progress(db, user.id, first.id, 2).await?;
    assert!(quiz.is_level_unlocked(&player, second.id).await?);

    Ok(())
}

/// Tests gating looks only at the immediately preceding level.
///
/// Expected: completing level 1 does not unlock level 3
#[tokio::test]
async fn only_previous_level_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_level(db).await?;
    factory::create_level(db).await?;
    let third = factory::create_level(db).await?;

    user_progress::create_completed_progress(db, user.id, first.id, 1).await?;

    assert!(
        !QuizService::new(db)
            .is_level_unlocked(&User::from_entity(user), third.id)
            .await?
    );

    Ok(())
}

/// Tests admins bypass level gating.
///
/// Expected: Ok(true) for a level whose predecessor is untouched
#[tokio::test]
async fn admin_bypasses_gating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::create_admin(db).await?);
    factory::create_level(db).await?;
    let second = factory::create_level(db).await?;

    assert!(QuizService::new(db).is_level_unlocked(&admin, second.id).await?);

    Ok(())
}
