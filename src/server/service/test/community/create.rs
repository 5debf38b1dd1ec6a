use super::*;

/// Tests a community submitted with a valid link and image is stored.
///
/// Expected: link kept, image URL under /storage/communities and the file on disk
#[tokio::test]
async fn stores_community_with_link_and_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Community)
        .build()
        .await
        .unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let mut params = CommunityParams::from_form(
        community_form("Teman Tuli", "https://temantuli.example.org/gabung"),
        true,
    )?;
    params.image = Some(png());

    let community = CommunityService::new(db, &storage).create(params).await?;

    assert_eq!(community.name, "Teman Tuli");
    assert_eq!(
        community.link.as_deref(),
        Some("https://temantuli.example.org/gabung")
    );
    let image_url = community.image_url.unwrap();
    assert!(image_url.starts_with("/storage/communities/"));
    assert!(stored_path(&root, &image_url).exists());

    Ok(())
}

/// Tests links that are not absolute http(s) URLs are refused before anything is saved.
///
/// Expected: Err(AppError::Validation) on the link field for every input
#[tokio::test]
async fn rejects_malformed_link() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Community)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    for link in ["not a url", "ftp://files.example.org", "https://[::1", "https://"] {
        let result = match CommunityParams::from_form(community_form("Teman Tuli", link), true) {
            Ok(params) => CommunityService::new(db, &storage).create(params).await,
            Err(errors) => Err(errors.into()),
        };

        match result {
            Err(AppError::Validation(errors)) => assert!(errors.has("link"), "{link}"),
            other => panic!("expected validation error for {link}, got {:?}", other.map(|c| c.id)),
        }
    }

    let stored = CommunityService::new(db, &storage)
        .get_paginated(None, PageRequest::new(1, 10))
        .await?;
    assert_eq!(stored.total, 0);

    Ok(())
}

/// Tests the service refuses a community without the required fields.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_name_and_description() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Community)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let result = CommunityService::new(db, &storage)
        .create(CommunityParams {
            name: None,
            description: Some("Tanpa nama".to_string()),
            link: None,
            image: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the uploaded image is removed again when the insert fails.
///
/// Expected: Err(AppError::DbErr) and no file left under /storage/communities
#[tokio::test]
async fn removes_image_when_insert_fails() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let mut params = CommunityParams::from_form(
        community_form("Teman Tuli", "https://temantuli.example.org"),
        true,
    )?;
    params.image = Some(png());

    let result = CommunityService::new(db, &storage).create(params).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    let leftover = std::fs::read_dir(root.join("communities"))?.count();
    assert_eq!(leftover, 0);

    Ok(())
}
