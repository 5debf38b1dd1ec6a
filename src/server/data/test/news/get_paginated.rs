use super::*;

/// Tests news are listed newest first.
///
/// Expected: Today, Yesterday, Last week
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    news::create_news_at(db, "Yesterday", now - Duration::days(1)).await?;
    news::create_news_at(db, "Today", now).await?;
    news::create_news_at(db, "Last week", now - Duration::days(7)).await?;

    let (items, total) = NewsRepository::new(db)
        .get_paginated(None, PageRequest::default())
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        items.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(),
        vec!["Today", "Yesterday", "Last week"]
    );

    Ok(())
}

/// Tests the search matches titles.
///
/// Expected: only the workshop article
#[tokio::test]
async fn searches_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::News)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    news::create_news(db, "Workshop bahasa isyarat").await?;
    news::create_news(db, "Lomba menggambar").await?;

    let (items, total) = NewsRepository::new(db)
        .get_paginated(Some("Workshop"), PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items[0].title, "Workshop bahasa isyarat");

    Ok(())
}
