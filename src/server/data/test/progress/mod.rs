use sea_orm::DbErr;

use crate::server::{
    data::progress::{AnswerCounts, ProgressRepository},
    model::progress::{ProgressStatus, UserProgress},
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_level_with_questions, user_answer, user_progress},
};

mod answer_counts;
mod reset;
mod upsert_progress;
