//! Deterministic stand-in for a captioning model.

use tracing::debug;

use super::{describe, GenerationRequest, TextGenerator};
use crate::error::GenerationError;

/// Generator that reports a fixed description for every upload.
pub struct MockGenerator {
    description: String,
}

impl MockGenerator {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        let (width, height) = request.upload.dimensions();
        debug!("Mock description for {}x{} upload", width, height);

        Ok(describe(&self.description, request.query))
    }
}
