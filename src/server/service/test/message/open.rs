use super::*;

/// Tests opening a message marks it as read and drops it from the unread list.
///
/// Expected: is_read set, unread list shrinks from 2 to 1
#[tokio::test]
async fn marks_message_as_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_message(db, false).await?;
    factory::create_message(db, false).await?;
    factory::create_message(db, true).await?;

    let service = MessageService::new(db);
    assert_eq!(service.get_paginated(true, PageRequest::default()).await?.total, 2);

    let opened = service.open(first.id).await?;
    assert!(opened.is_read);

    let unread = service.get_paginated(true, PageRequest::default()).await?;
    assert_eq!(unread.total, 1);
    assert!(unread.items.iter().all(|m| m.id != first.id));

    let all = service.get_paginated(false, PageRequest::default()).await?;
    assert_eq!(all.total, 3);

    Ok(())
}

/// Tests opening a missing message.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MessageService::new(db).open(5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
