//! Configuration structures for the scan pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// Query used when the user leaves the query empty.
pub const DEFAULT_QUERY: &str =
    "Extract brand name, expiry date, expired status, expected life span in days, and object counts.";

/// Main configuration for shelf.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Text generation configuration.
    pub generation: GenerationConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Query sent to the generator when none is supplied.
    pub default_query: String,

    /// Record a warning for every field that could not be extracted.
    pub warn_on_missing: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_query: DEFAULT_QUERY.to_string(),
            warn_on_missing: true,
        }
    }
}

/// Which text generator produces the description of an upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Deterministic mock description.
    #[default]
    Mock,
    /// Caption read from a file next to the image.
    Sidecar,
}

/// Text generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Generator used by `scan` and `batch`.
    pub generator: GeneratorKind,

    /// Description emitted by the mock generator.
    pub mock_description: String,

    /// Extension of sidecar caption files (`label.png` -> `label.png.txt`).
    pub sidecar_extension: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::Mock,
            mock_description: "Mock description of the uploaded image".to_string(),
            sidecar_extension: "txt".to_string(),
        }
    }
}

impl ShelfConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ShelfError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ShelfError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
