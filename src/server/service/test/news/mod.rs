use crate::server::{
    error::AppError,
    model::news::NewsParams,
    service::news::NewsService,
    util::{form::MultipartForm, storage::ImageStorage},
};
use test_utils::{builder::TestBuilder, factory};

use super::{png, stored_path};

mod create;
mod update;
