use super::*;

/// Tests rescheduling an event keeps the fields that were not submitted.
///
/// Expected: new date, title and location unchanged
#[tokio::test]
async fn reschedules_event() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let created = factory::create_event(
        db,
        "Kelas Bisindo",
        Utc.with_ymd_and_hms(2025, 8, 17, 9, 0, 0).unwrap(),
    )
    .await?;

    let mut form = MultipartForm::default();
    form.push("event_date", "2025-08-24T10:15");
    let updated = EventService::new(db, &storage)
        .update(created.id, EventParams::from_form(form, false)?)
        .await?;

    assert_eq!(
        updated.event_date,
        Utc.with_ymd_and_hms(2025, 8, 24, 10, 15, 0).unwrap()
    );
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.location, created.location);

    Ok(())
}

/// Tests updating an event that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_event() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let storage = ImageStorage::new(test.upload_dir().unwrap());
    let db = test.db.as_ref().unwrap();

    let mut form = MultipartForm::default();
    form.push("title", "Hilang");
    let result = EventService::new(db, &storage)
        .update(42, EventParams::from_form(form, false)?)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
