//! Multipart form decoding for resources that carry an image.

use axum::{body::Bytes, extract::Multipart};
use std::collections::HashMap;

use crate::server::error::{validation::ValidationErrors, AppError};

/// Largest accepted image upload in bytes (2048 KiB).
pub const MAX_IMAGE_SIZE: usize = 2048 * 1024;

const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "svg", "webp"];

/// An uploaded image that passed type and size checks.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Lower-case file extension the image is stored with.
    pub extension: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// Validates raw upload data, recording any problem under `field`.
    pub fn validate(
        field: &str,
        file_name: Option<&str>,
        content_type: Option<&str>,
        bytes: Bytes,
        errors: &mut ValidationErrors,
    ) -> Option<Self> {
        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .or_else(|| content_type.and_then(extension_for_content_type));

        let Some(extension) = extension else {
            errors.add(
                field,
                format!("The {field} must be a file of type: jpeg, jpg, png, gif, svg, webp."),
            );
            return None;
        };

        if bytes.len() > MAX_IMAGE_SIZE {
            errors.add(
                field,
                format!("The {field} may not be greater than 2048 kilobytes."),
            );
            return None;
        }

        Some(Self { extension, bytes })
    }
}

fn extension_for_content_type(content_type: &str) -> Option<String> {
    let extension = match content_type.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/svg+xml" => "svg",
        "image/webp" => "webp",
        _ => return None,
    };

    Some(extension.to_string())
}

/// Decoded `multipart/form-data` request.
///
/// Text fields keep every submitted value so list fields (`options`, `options[]`) can be
/// read back in order. The `image` field is checked while decoding and any problem with
/// it is reported by `take_errors`.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, Vec<String>>,
    image: Option<ImageUpload>,
    errors: ValidationErrors,
}

impl MultipartForm {
    /// Reads every part of the request body.
    ///
    /// # Returns
    /// - `Ok(MultipartForm)` - Body decoded (the image may still have failed validation)
    /// - `Err(AppError::MultipartErr)` - Body is not valid multipart data
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field
                .name()
                .unwrap_or_default()
                .trim_end_matches("[]")
                .to_string();

            if name == "image" {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;

                // Browsers send an empty part when no file was chosen
                if bytes.is_empty() {
                    continue;
                }

                form.set_image(file_name.as_deref(), content_type.as_deref(), bytes);
            } else {
                let value = field.text().await?;
                form.push(&name, value);
            }
        }

        Ok(form)
    }

    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        self.fields
            .entry(name.to_string())
            .or_default()
            .push(value.into());
    }

    pub fn set_image(&mut self, file_name: Option<&str>, content_type: Option<&str>, bytes: Bytes) {
        self.image =
            ImageUpload::validate("image", file_name, content_type, bytes, &mut self.errors);
    }

    /// First value of a text field, trimmed. `None` when the field was not sent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(|value| value.trim().to_string())
    }

    /// First value of a text field, `None` when absent or blank.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.text(name).filter(|value| !value.is_empty())
    }

    /// All values of a list field.
    ///
    /// A single value holding a JSON array is expanded into its elements.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        let values = self.fields.get(name)?;

        if let [single] = values.as_slice() {
            if single.trim_start().starts_with('[') {
                if let Ok(items) = serde_json::from_str::<Vec<String>>(single) {
                    return Some(items.into_iter().map(|v| v.trim().to_string()).collect());
                }
            }
        }

        Some(values.iter().map(|v| v.trim().to_string()).collect())
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn take_image(&mut self) -> Option<ImageUpload> {
        self.image.take()
    }

    /// Validation errors found while decoding, such as an unsupported image type.
    pub fn take_errors(&mut self) -> ValidationErrors {
        std::mem::take(&mut self.errors)
    }
}
