//! Core library for product label scanning.
//!
//! This crate provides:
//! - Rule-based field extraction from descriptive text (brand, expiry date,
//!   expired status, remaining life span, object count)
//! - A pluggable text-generation seam for the upstream captioning step
//! - Upload loading and the scan pipeline tying the two together

pub mod error;
pub mod extract;
pub mod models;
#[cfg(feature = "native")]
pub mod generation;
#[cfg(feature = "native")]
pub mod scanner;
#[cfg(feature = "native")]
pub mod upload;

pub use error::{GenerationError, Result, ShelfError, UploadError};
pub use extract::FieldExtractor;
pub use models::config::ShelfConfig;
pub use models::product::{ExpiryDate, ExtractionResult};

#[cfg(feature = "native")]
pub use generation::{GenerationRequest, MockGenerator, SidecarGenerator, TextGenerator};
#[cfg(feature = "native")]
pub use scanner::{ProductScanner, ScanReport};
#[cfg(feature = "native")]
pub use upload::Upload;
