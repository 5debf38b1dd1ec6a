use crate::server::{
    error::AppError,
    model::letter::{CreateLetterParams, UpdateLetterParams},
    service::letter::LetterService,
    util::storage::ImageStorage,
};
use test_utils::{builder::TestBuilder, factory};

use super::{png, stored_path};

mod create;
mod delete;
