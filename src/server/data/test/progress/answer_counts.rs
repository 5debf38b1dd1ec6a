use super::*;

/// Tests counts cover only the given player and level.
///
/// Expected: 2 answered, 1 correct
#[tokio::test]
async fn counts_answers_of_player_in_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (level, _) = create_level_with_questions(db, 3).await?;
    let (other_level, _) = create_level_with_questions(db, 1).await?;

    user_answer::create_user_answer(db, user.id, level.id, 1, true).await?;
    user_answer::create_user_answer(db, user.id, level.id, 2, false).await?;
    user_answer::create_user_answer(db, user.id, other_level.id, 1, true).await?;
    user_answer::create_user_answer(db, other.id, level.id, 3, true).await?;

    let counts = ProgressRepository::new(db)
        .answer_counts(user.id, level.id)
        .await?;

    assert_eq!(
        counts,
        AnswerCounts {
            answered: 2,
            correct: 1
        }
    );

    Ok(())
}

/// Tests re-answering a question overwrites the stored answer.
///
/// Expected: still one answer, now correct
#[tokio::test]
async fn upsert_answer_replaces_previous_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (level, _) = create_level_with_questions(db, 2).await?;
    let repo = ProgressRepository::new(db);

    repo.upsert_answer(user.id, level.id, 1, false).await?;
    repo.upsert_answer(user.id, level.id, 1, true).await?;

    assert_eq!(
        repo.answer_counts(user.id, level.id).await?,
        AnswerCounts {
            answered: 1,
            correct: 1
        }
    );

    Ok(())
}
