use super::*;

/// Tests an article is stored with its uploaded image.
///
/// Expected: image URL under /storage/news and the file on disk
#[tokio::test]
async fn stores_article_and_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let mut form = MultipartForm::default();
    form.push("title", "Hari Bahasa Isyarat Internasional");
    form.push("content", "Peringatan setiap 23 September.");
    let mut params = NewsParams::from_form(form, true)?;
    params.image = Some(png());

    let news = NewsService::new(db, &storage).create(params).await?;

    assert_eq!(news.title, "Hari Bahasa Isyarat Internasional");
    assert_eq!(news.content, "Peringatan setiap 23 September.");
    let image_url = news.image_url.unwrap();
    assert!(image_url.starts_with("/storage/news/"));
    assert!(stored_path(&root, &image_url).exists());

    Ok(())
}

/// Tests the service refuses an article without a title.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_title() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let result = NewsService::new(db, &storage)
        .create(NewsParams {
            title: None,
            content: Some("Tanpa judul".to_string()),
            image: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the uploaded image is removed again when the insert fails.
///
/// Expected: Err(AppError::DbErr) and no file left under /storage/news
#[tokio::test]
async fn removes_image_when_insert_fails() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let root = test.upload_dir().unwrap().to_path_buf();
    let storage = ImageStorage::new(&root);
    let db = test.db.as_ref().unwrap();

    let result = NewsService::new(db, &storage)
        .create(NewsParams {
            title: Some("Gagal".to_string()),
            content: Some("Tabel belum ada".to_string()),
            image: Some(png()),
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(std::fs::read_dir(root.join("news"))?.count(), 0);

    Ok(())
}
