use crate::server::{error::AppError, service::admin::AdminService};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_level_with_questions},
};

mod stats;
