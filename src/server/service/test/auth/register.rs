use super::*;

/// Tests registration creates a regular user with a hashed password.
///
/// Expected: user role, stored password differs from the plain text
#[tokio::test]
async fn creates_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db, &storage)
        .register(register_params("budi@example.com"))
        .await?;

    assert_eq!(user.role, Role::User);
    assert_eq!(user.email, "budi@example.com");

    let stored = <entity::prelude::User as sea_orm::EntityTrait>::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password, "rahasia123");
    assert!(stored.password.starts_with("$argon2"));

    Ok(())
}

/// Tests an email can only be registered once.
///
/// Expected: Err(AppError::Validation) on the email field
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = AuthService::new(db, &storage)
        .register(register_params(&existing.email))
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.has("email")),
        other => panic!("expected validation error, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
