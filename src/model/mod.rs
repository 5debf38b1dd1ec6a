//! API data transfer objects.
//!
//! These types define the JSON (and multipart form) contract of the HTTP API. They are
//! produced from server domain models at the controller boundary and documented through
//! `utoipa` schemas.

pub mod admin;
pub mod api;
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
