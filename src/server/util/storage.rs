use rand::Rng;
use std::path::{Component, Path, PathBuf};

use crate::server::{error::AppError, util::form::ImageUpload};

/// URL prefix uploaded files are served under.
pub const PUBLIC_PREFIX: &str = "/storage";

const FILE_NAME_LENGTH: usize = 40;

/// Stores uploaded images on the local filesystem.
///
/// Files are written to `<root>/<folder>/<random name>.<ext>` and addressed by the
/// public URL `/storage/<folder>/<random name>.<ext>`.
#[derive(Clone, Debug)]
pub struct ImageStorage {
    root: PathBuf,
}

impl ImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes an image into `folder` under a fresh random name.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored file
    /// - `Err(AppError::IoErr)` - Failed to create the folder or write the file
    pub async fn store(&self, folder: &str, image: &ImageUpload) -> Result<String, AppError> {
        let directory = self.root.join(folder);
        tokio::fs::create_dir_all(&directory).await?;

        let file_name = format!("{}.{}", random_file_stem(), image.extension);
        tokio::fs::write(directory.join(&file_name), &image.bytes).await?;

        tracing::debug!("Stored image {}/{}", folder, file_name);

        Ok(format!("{PUBLIC_PREFIX}/{folder}/{file_name}"))
    }

    /// Removes a previously stored image by its public URL.
    ///
    /// Missing files and URLs outside the storage root are ignored.
    pub async fn delete(&self, url: &str) -> Result<(), AppError> {
        let Some(path) = self.resolve(url) else {
            tracing::warn!("Refusing to delete image outside storage: {}", url);
            return Ok(());
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the old image when a record's image was replaced or removed.
    pub async fn delete_replaced(&self, old: Option<&str>, new: Option<&str>) -> Result<(), AppError> {
        match old {
            Some(old) if Some(old) != new => self.delete(old).await,
            _ => Ok(()),
        }
    }

    /// Passes `result` through, removing the freshly stored `url` first when the write
    /// it belonged to failed.
    ///
    /// Removal failures are only logged so the caller still sees the original error.
    pub async fn discard_on_error<T, E>(
        &self,
        url: Option<&str>,
        result: Result<T, E>,
    ) -> Result<T, AppError>
    where
        E: Into<AppError>,
    {
        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                if let Some(url) = url {
                    if let Err(e) = self.delete(url).await {
                        tracing::warn!("Failed to remove orphaned image {}: {}", url, e);
                    }
                }
                Err(err.into())
            }
        }
    }

    /// Maps a public URL back to a path inside the storage root.
    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let relative = url
            .strip_prefix(PUBLIC_PREFIX)?
            .trim_start_matches('/');
        let relative = Path::new(relative);

        if relative.as_os_str().is_empty()
            || !relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)))
        {
            return None;
        }

        Some(self.root.join(relative))
    }
}

fn random_file_stem() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..FILE_NAME_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
