//! Error types for the shelf-core library.
//!
//! Field extraction itself never fails; these cover the layers around it.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the shelf library.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Upload loading error.
    #[error("upload error: {0}")]
    Upload(#[from] UploadError),

    /// Text generation error.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to loading an uploaded image.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The file extension is not one of the accepted image types.
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),

    /// The file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The image could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// Errors raised by a text generator.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The sidecar caption file for an image is missing.
    #[error("no caption found at {}", .0.display())]
    MissingCaption(PathBuf),

    /// The generator produced no text.
    #[error("generator returned empty text")]
    Empty,

    /// I/O error while reading generator input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the shelf library.
pub type Result<T> = std::result::Result<T, ShelfError>;
