use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Record counts shown on the admin dashboard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StatsDto {
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
