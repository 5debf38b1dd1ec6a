//! Business logic layer.
//!
//! Services orchestrate repositories, image storage and validation rules for each
//! resource. Controllers call services with validated parameters and receive domain
//! models or `AppError`s back.

pub mod admin;
pub mod auth;
pub mod community;
pub mod contact;
pub mod event;
pub mod letter;
pub mod level;
pub mod message;
pub mod news;
pub mod question;
pub mod quiz;
pub mod user;
pub mod word;

#[cfg(test)]
mod test;
