use sea_orm::DbErr;

use crate::server::{
    data::user::UserRepository,
    model::{pagination::PageRequest, user::Role},
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

mod get_paginated;
