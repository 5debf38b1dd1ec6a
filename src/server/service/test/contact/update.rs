use super::*;

/// Tests a contact channel is replaced with the submitted values.
///
/// Expected: platform, value and url overwritten
#[tokio::test]
async fn replaces_contact_values() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contact = factory::create_contact(db, "Instagram", "@isyarat").await?;

    let params = ContactParams::from_dto(payload(
        " Instagram ",
        "@isyarat.id",
        Some("https://instagram.com/isyarat.id"),
    ))?;
    let updated = ContactService::new(db).update(contact.id, params).await?;

    assert_eq!(updated.platform, "Instagram");
    assert_eq!(updated.value, "@isyarat.id");
    assert_eq!(
        updated.url.as_deref(),
        Some("https://instagram.com/isyarat.id")
    );

    Ok(())
}

/// Tests a contact URL that is not an absolute http(s) URL is refused.
///
/// Expected: Err(AppError::Validation) on the url field, stored contact unchanged
#[tokio::test]
async fn rejects_malformed_url() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ContactService::new(db);

    let contact = factory::create_contact(db, "WhatsApp", "+62 812 0000 0000").await?;

    let result = match ContactParams::from_dto(payload("WhatsApp", "+62", Some("wa.me/62812"))) {
        Ok(params) => service.update(contact.id, params).await,
        Err(errors) => Err(errors.into()),
    };

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.has("url")),
        other => panic!("expected validation error, got {:?}", other.map(|c| c.id)),
    }
    assert_eq!(service.get_by_id(contact.id).await?.value, "+62 812 0000 0000");

    Ok(())
}

/// Tests updating a contact that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_contact() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = ContactParams::from_dto(payload("Email", "halo@isyarat.id", None))?;
    let result = ContactService::new(db).update(5, params).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
