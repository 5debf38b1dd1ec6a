use crate::model::admin::StatsDto;

/// Record counts for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub users: u64,
    pub letters: u64,
    pub words: u64,
    pub news: u64,
    pub events: u64,
    pub communities: u64,
    pub levels: u64,
    pub questions: u64,
    pub unread_messages: u64,
}

impl Stats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            users: self.users,
            letters: self.letters,
            words: self.words,
            news: self.news,
            events: self.events,
            communities: self.communities,
            levels: self.levels,
            questions: self.questions,
            unread_messages: self.unread_messages,
        }
    }
}
