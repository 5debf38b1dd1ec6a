use sea_orm::DbErr;

use crate::server::data::question::{NewQuestion, QuestionRepository};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_level_with_questions},
};

mod create;
mod find;
mod next_id;
