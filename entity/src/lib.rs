//! SeaORM entity models for every table of the application schema.

pub mod prelude;

pub mod community;
pub mod contact;
pub mod event;
pub mod letter;
pub mod level;
pub mod message;
pub mod news;
pub mod question;
pub mod user;
pub mod user_answer;
pub mod user_progress;
pub mod word;
