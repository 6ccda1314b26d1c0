//! Loading of uploaded product images.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::error::UploadError;

/// File extensions accepted as uploads.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// A decoded product image.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Where the image was read from.
    pub path: PathBuf,

    /// Decoded image.
    pub image: DynamicImage,
}

impl Upload {
    /// Open and decode an image, rejecting unsupported file types.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();

        if !is_supported(path) {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string();
            return Err(UploadError::UnsupportedType(extension));
        }

        if !path.exists() {
            return Err(UploadError::NotFound(path.to_path_buf()));
        }

        let image = image::open(path).map_err(|e| UploadError::Decode(e.to_string()))?;
        let (width, height) = image.dimensions();
        debug!("Loaded upload {}: {}x{}", path.display(), width, height);

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    /// Image dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Whether `path` has one of the accepted image extensions.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
