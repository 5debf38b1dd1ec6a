use super::*;

/// Tests a reset only touches the given player and level.
///
/// Expected: player's row and answers gone, other player's kept
#[tokio::test]
async fn removes_answers_and_progress_of_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (level, _) = create_level_with_questions(db, 1).await?;

    for player in [user.id, other.id] {
        user_answer::create_user_answer(db, player, level.id, 1, true).await?;
        user_progress::create_completed_progress(db, player, level.id, 1).await?;
    }

    let repo = ProgressRepository::new(db);
    repo.reset(user.id, level.id).await?;

    assert!(repo.find(user.id, level.id).await?.is_none());
    assert_eq!(repo.answer_counts(user.id, level.id).await?.answered, 0);
    assert!(repo.find(other.id, level.id).await?.is_some());
    assert_eq!(repo.answer_counts(other.id, level.id).await?.answered, 1);

    Ok(())
}
