use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or to parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A stored question has an `options` column that is not a JSON string array.
    #[error("Question {question_id} of level {level_id} has malformed options: {reason}")]
    MalformedOptions {
        level_id: i32,
        question_id: i32,
        reason: String,
    },
}
