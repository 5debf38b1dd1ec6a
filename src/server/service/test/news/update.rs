use super::*;

/// Tests adding an image to an article and editing its title.
///
/// Expected: new title, content kept, image stored
#[tokio::test]
async fn edits_title_and_adds_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let created = factory::create_news(db, "Lomba Isyarat").await?;

    let mut form = MultipartForm::default();
    form.push("title", "Lomba Isyarat Nasional");
    let mut params = NewsParams::from_form(form, false)?;
    params.image = Some(png());

    let updated = NewsService::new(db, &storage)
        .update(created.id, params)
        .await?;

    assert_eq!(updated.title, "Lomba Isyarat Nasional");
    assert_eq!(updated.content, created.content);
    assert!(stored_path(&root, updated.image_url.as_deref().unwrap()).exists());

    Ok(())
}

/// Tests updating an article that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_article() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let result = NewsService::new(db, &storage)
        .update(
            7,
            NewsParams {
                title: Some("Hilang".to_string()),
                content: None,
                image: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
