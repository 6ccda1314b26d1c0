//! Captions written next to the image by an external tool.

use std::path::PathBuf;

use tracing::debug;

use super::{describe, GenerationRequest, TextGenerator};
use crate::error::GenerationError;
use crate::upload::Upload;

/// Generator that reads `<image>.<extension>` as the image caption.
pub struct SidecarGenerator {
    extension: String,
}

impl SidecarGenerator {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Caption path for an upload: `label.png` -> `label.png.txt`.
    pub fn caption_path(&self, upload: &Upload) -> PathBuf {
        let mut path = upload.path.clone().into_os_string();
        path.push(".");
        path.push(&self.extension);
        PathBuf::from(path)
    }
}

impl TextGenerator for SidecarGenerator {
    fn name(&self) -> &str {
        "sidecar"
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        let path = self.caption_path(request.upload);
        if !path.exists() {
            return Err(GenerationError::MissingCaption(path));
        }

        let caption = std::fs::read_to_string(&path)?;
        let caption = caption.trim();
        if caption.is_empty() {
            return Err(GenerationError::Empty);
        }

        debug!("Read {} byte caption from {}", caption.len(), path.display());

        Ok(describe(caption, request.query))
    }
}
