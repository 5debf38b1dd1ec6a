//! HTTP request handlers.
//!
//! Controllers extract request data, enforce access through `AuthGuard`, convert DTOs and
//! multipart forms into parameter models, call the matching service and convert the
//! resulting domain models back into DTOs.

pub mod admin;
pub mod auth;
pub mod community;
pub mod contact;
pub mod event;
pub mod letter;
pub mod level;
pub mod message;
pub mod news;
pub mod progress;
pub mod question;
pub mod user;
pub mod word;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::pagination::{PageRequest, DEFAULT_PER_PAGE};

/// Paging query shared by every list endpoint.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, max: 100)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    DEFAULT_PER_PAGE
}

impl PaginationParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.entries)
    }
}

/// Text search query of public lists.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring to look for
    pub search: Option<String>,
}

impl SearchParams {
    /// The search term, ignoring blank input.
    pub fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty())
    }
}
