use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// The user lacks a permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The message is only logged.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// The user tried to play a level whose preceding level is not completed.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} attempted to access locked level {level_id}")]
    LevelLocked { user_id: i32, level_id: i32 },

    /// Email unknown or password mismatch during login.
    ///
    /// Results in a 401 Unauthorized response without revealing which part was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Unauthenticated"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden with "Forbidden"
/// - `LevelLocked` → 403 Forbidden explaining the level is locked
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::LevelLocked { .. } => (
                StatusCode::FORBIDDEN,
                "This level is locked. Complete the previous level first.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
