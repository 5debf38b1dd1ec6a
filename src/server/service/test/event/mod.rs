use chrono::{TimeZone, Utc};

use crate::server::{
    error::AppError,
    model::event::EventParams,
    service::event::EventService,
    util::{form::MultipartForm, storage::ImageStorage},
};
use test_utils::{builder::TestBuilder, factory};

use super::{png, stored_path};

mod update;
