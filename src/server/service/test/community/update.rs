use super::*;

/// Tests a blank link clears it while the other fields stay untouched.
///
/// Expected: link None, name and description kept
#[tokio::test]
async fn clears_link() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Community)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();
    let service = CommunityService::new(db, &storage);

    let created = service
        .create(CommunityParams::from_form(
            community_form("Gerkatin", "https://gerkatin.example.org"),
            true,
        )?)
        .await?;

    let mut form = MultipartForm::default();
    form.push("link", "");
    let updated = service
        .update(created.id, CommunityParams::from_form(form, false)?)
        .await?;

    assert_eq!(updated.link, None);
    assert_eq!(updated.name, "Gerkatin");
    assert_eq!(updated.description, created.description);

    Ok(())
}

/// Tests a replacement link must also be a valid URL.
///
/// Expected: Err on the link field
#[test]
fn rejects_malformed_replacement_link() {
    let mut form = MultipartForm::default();
    form.push("link", "https://ex<ample>.com");

    let errors = CommunityParams::from_form(form, false).unwrap_err();
    assert!(errors.has("link"));
}
