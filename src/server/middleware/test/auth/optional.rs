use super::*;

/// Tests anonymous requests resolve to no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_anonymous_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).optional().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests logged in requests resolve to the session user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let created = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(created.id).await?;

    let user = AuthGuard::new(db, session).optional().await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));

    Ok(())
}
