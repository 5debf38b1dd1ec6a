use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Field level validation failures collected while parsing a request.
///
/// Messages are grouped per field name so a client can show every problem at once.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("The given data was invalid")]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true when at least one message was recorded for `field`.
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Finishes a validation pass, yielding `value` only when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        let error = match self.errors.values().flatten().next() {
            Some(first) => first.clone(),
            None => self.to_string(),
        };

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto {
                error,
                errors: self.errors,
            }),
        )
            .into_response()
    }
}
