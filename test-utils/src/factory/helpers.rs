//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a level with `count` questions numbered 1..=count.
///
/// Every question has the options `["A", "B", "C"]` with `"A"` as the correct option.
///
/// # Returns
/// - `Ok((level, questions))` - The level and its questions in id order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_level_with_questions(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::level::Model, Vec<entity::question::Model>), DbErr> {
    let level = crate::factory::level::create_level(db).await?;

    let mut questions = Vec::with_capacity(count.max(0) as usize);
    for id in 1..=count {
        questions.push(crate::factory::question::create_question(db, level.id, id).await?);
    }

    Ok((level, questions))
}
