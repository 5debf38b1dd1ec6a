use super::*;

/// Tests the level overview carries unlock state, status and score per level.
///
/// Expected: first two levels unlocked, third locked, progress of the first reported
#[tokio::test]
async fn reports_unlock_state_and_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (first, _) = create_level_with_questions(db, 2).await?;
    factory::create_level(db).await?;
    factory::create_level(db).await?;

    user_progress::create_completed_progress(db, user.id, first.id, 2).await?;

    let levels = QuizService::new(db)
        .levels_for_user(&User::from_entity(user))
        .await?;

    assert_eq!(levels.len(), 3);
    assert_eq!(
        levels.iter().map(|l| l.unlocked).collect::<Vec<_>>(),
        vec![true, true, false]
    );
    assert_eq!(levels[0].status, Some(ProgressStatus::Completed));
    assert_eq!(levels[0].score, 100);
    assert_eq!(levels[0].summary.total_questions, 2);
    assert_eq!(levels[1].status, None);
    assert_eq!(levels[1].score, 0);

    Ok(())
}

/// Tests every level is unlocked for an admin.
///
/// Expected: all levels unlocked
#[tokio::test]
async fn admin_sees_every_level_unlocked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::create_admin(db).await?);
    factory::create_level(db).await?;
    factory::create_level(db).await?;

    let levels = QuizService::new(db).levels_for_user(&admin).await?;

    assert!(levels.iter().all(|l| l.unlocked));

    Ok(())
}
