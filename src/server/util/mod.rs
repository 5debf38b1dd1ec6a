//! Shared helpers used across controllers and services.

pub mod form;
pub mod parse;
pub mod password;
pub mod storage;
