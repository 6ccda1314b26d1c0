//! Text generation for uploaded images.
//!
//! The extractor only ever sees text. Whatever produces that text from an
//! image (a captioning model, a language model, a canned description) sits
//! behind [`TextGenerator`] and is constructed once, then handed to the
//! scanner by reference.

mod mock;
mod sidecar;

pub use mock::MockGenerator;
pub use sidecar::SidecarGenerator;

use crate::error::GenerationError;
use crate::models::config::{GenerationConfig, GeneratorKind};
use crate::upload::Upload;

/// Input for one generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// The uploaded image.
    pub upload: &'a Upload,

    /// User query accompanying the upload.
    pub query: &'a str,
}

/// Trait for text generators.
pub trait TextGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Produce descriptive text for an upload.
    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError>;
}

/// Build the generator selected in configuration.
pub fn from_config(config: &GenerationConfig) -> Box<dyn TextGenerator> {
    match config.generator {
        GeneratorKind::Mock => Box::new(MockGenerator::new(&config.mock_description)),
        GeneratorKind::Sidecar => Box::new(SidecarGenerator::new(&config.sidecar_extension)),
    }
}

/// Frame a description and query the way both generators report them.
pub fn describe(description: &str, query: &str) -> String {
    format!("Image description: [{}]. Query: {}", description, query)
}
