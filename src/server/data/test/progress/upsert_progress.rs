use super::*;

/// Tests storing progress twice keeps a single row with the latest values.
///
/// Expected: completed 100% after an earlier in-progress write
#[tokio::test]
async fn replaces_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let level = factory::create_level(db).await?;
    let repo = ProgressRepository::new(db);

    repo.upsert_progress(&UserProgress::compute(user.id, level.id, 2, 1, 1))
        .await?;
    let stored = repo
        .upsert_progress(&UserProgress::compute(user.id, level.id, 2, 2, 2))
        .await?;

    assert_eq!(stored.status, ProgressStatus::Completed);
    assert_eq!(stored.score, 100);
    assert!(stored.updated_at.is_some());
    assert_eq!(repo.get_by_user(user.id).await?.len(), 1);

    Ok(())
}
