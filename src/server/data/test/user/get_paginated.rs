use super::*;

/// Tests the role filter and name/email search.
///
/// Expected: one admin; search finds the account by email
#[tokio::test]
async fn filters_by_role_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;
    factory::create_user(db).await?;
    UserFactory::new(db)
        .name("Joko")
        .email("joko@sekolah.id")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let (admins, total) = repo
        .get_paginated(None, Some(Role::Admin), PageRequest::default())
        .await?;
    assert_eq!(total, 1);
    assert_eq!(admins[0].role, Role::Admin);

    let (found, total) = repo
        .get_paginated(Some("sekolah"), None, PageRequest::default())
        .await?;
    assert_eq!(total, 1);
    assert_eq!(found[0].name, "Joko");

    Ok(())
}
