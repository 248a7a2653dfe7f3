//! Error types for the recibo-core library.

use thiserror::Error;

/// Main error type for the recibo library.
#[derive(Error, Debug)]
pub enum ReciboError {
    /// OCR boundary error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the external OCR collaborator.
///
/// Extraction itself never fails on data quality; a garbled transcript
/// degrades to fewer or zero items. These variants cover the boundary
/// before extraction is ever invoked.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Backend configuration is incomplete.
    #[error("OCR configuration is missing: {0}")]
    MissingConfig(String),

    /// The backend failed to process the image.
    #[error("failed to process image with OCR backend: {0}")]
    Backend(String),

    /// The backend returned an empty result.
    #[error("OCR processing returned empty result")]
    Empty,
}

/// Result type for the recibo library.
pub type Result<T> = std::result::Result<T, ReciboError>;
