use super::*;
use crate::server::{data::user::UserRepository, model::user::UserChanges};

/// Tests an admin cannot delete their own account.
///
/// Expected: Err(AppError::Validation) and the account still exists
#[tokio::test]
async fn refuses_to_delete_own_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let service = UserService::new(db, &storage);

    let result = service.delete(admin.id, admin.id).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(service.get_by_id(admin.id).await.is_ok());

    Ok(())
}

/// Tests deleting an account removes its profile picture.
///
/// Expected: user gone and image file removed
#[tokio::test]
async fn deletes_user_and_profile_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;

    let url = storage.store("users", &png()).await?;
    UserRepository::new(db)
        .update(
            user.id,
            UserChanges {
                image_url: Some(url.clone()),
                ..Default::default()
            },
        )
        .await?;

    let service = UserService::new(db, &storage);
    service.delete(admin.id, user.id).await?;

    assert!(matches!(
        service.get_by_id(user.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(!stored_path(&root, &url).exists());

    Ok(())
}
