//! Scan pipeline: upload -> generated text -> product fields.

use std::path::Path;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::GenerationError;
use crate::extract::FieldExtractor;
use crate::generation::{GenerationRequest, TextGenerator};
use crate::models::config::ExtractionConfig;
use crate::models::product::ExtractionResult;
use crate::upload::Upload;

/// Result of scanning one upload.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Extracted product fields.
    pub result: ExtractionResult,
    /// Query sent with the upload, after defaulting.
    pub query: String,
    /// Text the generator produced.
    pub generated_text: String,
    /// Generator that produced the text.
    pub generator: String,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Runs a text generator over uploads and extracts fields from its output.
pub struct ProductScanner<'g, G: TextGenerator + ?Sized> {
    generator: &'g G,
    extractor: FieldExtractor,
    config: ExtractionConfig,
}

impl<'g, G: TextGenerator + ?Sized> ProductScanner<'g, G> {
    /// Create a scanner over a generator with default extraction settings.
    pub fn new(generator: &'g G) -> Self {
        Self {
            generator,
            extractor: FieldExtractor::new(),
            config: ExtractionConfig::default(),
        }
    }

    /// Set extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Open an image and scan it.
    pub fn scan_file(&self, path: impl AsRef<Path>, query: &str) -> crate::Result<ScanReport> {
        let upload = Upload::open(path)?;
        Ok(self.scan(&upload, query)?)
    }

    /// Scan an upload against the local wall-clock time.
    pub fn scan(&self, upload: &Upload, query: &str) -> Result<ScanReport, GenerationError> {
        self.scan_at(upload, query, Local::now().naive_local())
    }

    /// Scan an upload, comparing expiry dates against `now`.
    pub fn scan_at(
        &self,
        upload: &Upload,
        query: &str,
        now: NaiveDateTime,
    ) -> Result<ScanReport, GenerationError> {
        let start = Instant::now();

        let query = match query.trim() {
            "" => self.config.default_query.as_str(),
            q => q,
        };

        info!(
            "Scanning {} with {} generator",
            upload.path.display(),
            self.generator.name()
        );

        let generated_text = self.generator.generate(&GenerationRequest { upload, query })?;
        debug!("Generated {} characters of text", generated_text.len());

        let result = self.extractor.extract_at(&generated_text, now);
        let warnings = self.collect_warnings(&result);

        Ok(ScanReport {
            result,
            query: query.to_string(),
            generated_text,
            generator: self.generator.name().to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn collect_warnings(&self, result: &ExtractionResult) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(expiry) = &result.expiry_date {
            if expiry.date.is_none() {
                warnings.push(format!(
                    "Expiry date '{}' is not in day/month/year form",
                    expiry.raw
                ));
            }
        }

        if self.config.warn_on_missing {
            if result.brand_name.is_none() {
                warnings.push("Could not extract brand name".to_string());
            }
            if result.expiry_date.is_none() {
                warnings.push("Could not extract expiry date".to_string());
            }
            if result.object_count.is_none() {
                warnings.push("Could not extract object count".to_string());
            }
        }

        warnings
    }
}
