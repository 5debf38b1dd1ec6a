use super::*;

/// Tests login succeeds with the registered password.
///
/// Expected: Ok(User) with the registered ID
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db, &storage);

    let registered = service.register(register_params("siti@example.com")).await?;
    let user = service.login("siti@example.com", "rahasia123").await?;

    assert_eq!(user.id, registered.id);

    Ok(())
}

/// Tests wrong password and unknown email are both rejected the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) twice
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db, &storage);

    service.register(register_params("siti@example.com")).await?;

    let wrong_password = service.login("siti@example.com", "salah12345").await;
    let unknown_email = service.login("nobody@example.com", "rahasia123").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
