use super::*;

/// Tests dashboard counts reflect every resource and only unread messages.
///
/// Expected: counts matching the created records
#[tokio::test]
async fn counts_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_admin(db).await?;
    factory::create_letter(db, "A").await?;
    factory::create_word(db, "Makan").await?;
    factory::create_news(db, "Festival Isyarat").await?;
    factory::create_community(db, "Teman Tuli").await?;
    create_level_with_questions(db, 3).await?;
    create_level_with_questions(db, 2).await?;
    factory::create_message(db, false).await?;
    factory::create_message(db, true).await?;

    let stats = AdminService::new(db).stats().await?;

    assert_eq!(stats.users, 2);
    assert_eq!(stats.letters, 1);
    assert_eq!(stats.words, 1);
    assert_eq!(stats.news, 1);
    assert_eq!(stats.events, 0);
    assert_eq!(stats.communities, 1);
    assert_eq!(stats.levels, 2);
    assert_eq!(stats.questions, 5);
    assert_eq!(stats.unread_messages, 1);

    Ok(())
}
