//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into every handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::util::storage::ImageStorage;

/// Shared resources of the API.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `ImageStorage` only holds the upload root path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Writes and removes uploaded images below the configured upload directory.
    pub storage: ImageStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, storage: ImageStorage) -> Self {
        Self { db, storage }
    }
}
