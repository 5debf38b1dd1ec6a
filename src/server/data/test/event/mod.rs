use chrono::{Duration, Utc};
use sea_orm::DbErr;

use crate::server::{
    data::event::EventRepository,
    model::{event::EventFilter, pagination::PageRequest},
};
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
