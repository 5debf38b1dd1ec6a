use crate::{
    model::contact::ContactPayloadDto,
    server::{error::AppError, model::contact::ContactParams, service::contact::ContactService},
};
use test_utils::{builder::TestBuilder, factory};

mod update;

fn payload(platform: &str, value: &str, url: Option<&str>) -> ContactPayloadDto {
    ContactPayloadDto {
        platform: platform.to_string(),
        value: value.to_string(),
        url: url.map(str::to_string),
    }
}
