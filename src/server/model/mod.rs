//! Domain models and operation parameters.
//!
//! Domain models are converted from SeaORM entities at the repository boundary and into
//! DTOs at the controller boundary. Parameter types are built from request DTOs or
//! multipart forms and carry the validated, normalized input of an operation.

pub mod community;
pub mod contact;
pub mod event;
pub mod letter;
pub mod level;
pub mod message;
pub mod news;
pub mod pagination;
pub mod progress;
pub mod question;
pub mod stats;
pub mod user;
pub mod word;
