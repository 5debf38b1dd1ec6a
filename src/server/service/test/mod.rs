use axum::body::Bytes;

use crate::server::util::form::ImageUpload;

mod admin;
mod auth;
mod community;
mod contact;
mod event;
mod letter;
mod level;
mod message;
mod news;
mod word;

/// Small PNG upload used by tests that store images.
fn png() -> ImageUpload {
    ImageUpload {
        extension: "png".to_string(),
        bytes: Bytes::from_static(b"\x89PNG\r\n\x1a\n"),
    }
}

/// Path of a stored image below the storage root, from its public URL.
fn stored_path(root: &std::path::Path, url: &str) -> std::path::PathBuf {
    root.join(url.trim_start_matches("/storage/"))
}
