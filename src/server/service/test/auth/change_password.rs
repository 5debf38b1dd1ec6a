use super::*;

/// Tests the password changes when the current one is confirmed.
///
/// Expected: login works with the new password only
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db, &storage);

    let user = service.register(register_params("andi@example.com")).await?;

    service
        .change_password(
            user.id,
            ChangePasswordParams {
                current_password: "rahasia123".to_string(),
                new_password: "lebihaman456".to_string(),
            },
        )
        .await?;

    assert!(service.login("andi@example.com", "lebihaman456").await.is_ok());
    assert!(service.login("andi@example.com", "rahasia123").await.is_err());

    Ok(())
}

/// Tests a wrong current password is reported as a validation error.
///
/// Expected: Err(AppError::Validation) on current_password
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db, &storage);

    let user = service.register(register_params("andi@example.com")).await?;

    let result = service
        .change_password(
            user.id,
            ChangePasswordParams {
                current_password: "bukanini99".to_string(),
                new_password: "lebihaman456".to_string(),
            },
        )
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.has("current_password")),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
