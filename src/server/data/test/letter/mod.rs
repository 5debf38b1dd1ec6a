use crate::server::{data::letter::LetterRepository, model::pagination::PageRequest};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_letter;
