use crate::server::{
    error::AppError,
    model::{community::CommunityParams, pagination::PageRequest},
    service::community::CommunityService,
    util::{form::MultipartForm, storage::ImageStorage},
};
use test_utils::builder::TestBuilder;

use super::{png, stored_path};

mod create;
mod update;

/// Community form with a name, a description and the given link.
fn community_form(name: &str, link: &str) -> MultipartForm {
    let mut form = MultipartForm::default();
    form.push("name", name);
    form.push("description", "Komunitas belajar bahasa isyarat");
    form.push("link", link);
    form
}
