use crate::server::{
    error::AppError,
    model::word::{CreateWordParams, UpdateWordParams},
    service::word::WordService,
    util::storage::ImageStorage,
};
use test_utils::{builder::TestBuilder, factory};

use super::{png, stored_path};

mod update;
