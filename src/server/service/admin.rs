use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        community::CommunityRepository, event::EventRepository, letter::LetterRepository,
        level::LevelRepository, message::MessageRepository, news::NewsRepository,
        question::QuestionRepository, user::UserRepository, word::WordRepository,
    },
    error::AppError,
    model::stats::Stats,
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the records shown on the admin dashboard.
    pub async fn stats(&self) -> Result<Stats, AppError> {
        Ok(Stats {
            users: UserRepository::new(self.db).count().await?,
            letters: LetterRepository::new(self.db).count().await?,
            words: WordRepository::new(self.db).count().await?,
            news: NewsRepository::new(self.db).count().await?,
            events: EventRepository::new(self.db).count().await?,
            communities: CommunityRepository::new(self.db).count().await?,
            levels: LevelRepository::new(self.db).count().await?,
            questions: QuestionRepository::new(self.db).count().await?,
            unread_messages: MessageRepository::new(self.db).count_unread().await?,
        })
    }
}
