use super::*;

/// Tests events are ordered by the date they take place.
///
/// Expected: Past, Soon, Later
#[tokio::test]
async fn orders_by_event_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_event(db, "Later", now + Duration::days(30)).await?;
    factory::create_event(db, "Past", now - Duration::days(3)).await?;
    factory::create_event(db, "Soon", now + Duration::days(2)).await?;

    let (events, _) = EventRepository::new(db)
        .get_paginated(&EventFilter::default(), PageRequest::default())
        .await?;

    assert_eq!(
        events.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
        vec!["Past", "Soon", "Later"]
    );

    Ok(())
}

/// Tests the lower date bound drops past events.
///
/// Expected: Soon and Later only
#[tokio::test]
async fn filters_upcoming_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_event(db, "Past", now - Duration::days(3)).await?;
    factory::create_event(db, "Soon", now + Duration::days(2)).await?;
    factory::create_event(db, "Later", now + Duration::days(30)).await?;

    let filter = EventFilter {
        search: None,
        from: Some(now),
    };
    let (events, total) = EventRepository::new(db)
        .get_paginated(&filter, PageRequest::default())
        .await?;

    assert_eq!(total, 2);
    assert!(events.iter().all(|e| e.event_date >= now));

    Ok(())
}
