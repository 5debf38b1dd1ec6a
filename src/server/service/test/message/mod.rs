use crate::server::{
    error::AppError,
    model::{message::CreateMessageParams, pagination::PageRequest},
    service::message::MessageService,
};
use test_utils::{builder::TestBuilder, factory};

mod open;
