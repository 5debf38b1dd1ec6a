pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_user_table;
mod m20250901_000002_create_letter_table;
mod m20250901_000003_create_word_table;
mod m20250901_000004_create_news_table;
mod m20250901_000005_create_event_table;
mod m20250901_000006_create_community_table;
mod m20250901_000007_create_level_table;
mod m20250901_000008_create_question_table;
mod m20250901_000009_create_user_answer_table;
mod m20250901_000010_create_user_progress_table;
mod m20250901_000011_create_contact_table;
mod m20250901_000012_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_user_table::Migration),
            Box::new(m20250901_000002_create_letter_table::Migration),
            Box::new(m20250901_000003_create_word_table::Migration),
            Box::new(m20250901_000004_create_news_table::Migration),
            Box::new(m20250901_000005_create_event_table::Migration),
            Box::new(m20250901_000006_create_community_table::Migration),
            Box::new(m20250901_000007_create_level_table::Migration),
            Box::new(m20250901_000008_create_question_table::Migration),
            Box::new(m20250901_000009_create_user_answer_table::Migration),
            Box::new(m20250901_000010_create_user_progress_table::Migration),
            Box::new(m20250901_000011_create_contact_table::Migration),
            Box::new(m20250901_000012_create_message_table::Migration),
        ]
    }
}
