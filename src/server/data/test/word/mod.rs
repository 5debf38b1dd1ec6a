use crate::server::{
    data::word::WordRepository,
    model::{pagination::PageRequest, word::WordFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;
