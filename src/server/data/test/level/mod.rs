use sea_orm::DbErr;

use crate::server::data::level::LevelRepository;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_level_with_questions},
};

mod find_previous_id;
mod get_all;
