//! Core library for receipt OCR post-processing.
//!
//! This crate provides:
//! - Transcript layout classification (tabular vs. free-form receipts)
//! - Heuristic line-item extraction with a deterministic fallback cascade
//! - Merchant and currency detection
//! - Structured receipt records with OCR metadata, serializable to the
//!   wire format expected by downstream stores

pub mod error;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{OcrError, ReciboError, Result};
pub use models::receipt::{
    LineItem, Merchant, OcrMetadata, PageInfo, ProcessingInfo, Receipt, ReceiptRecord,
};
pub use ocr::{OcrBackend, OcrOutput};
pub use receipt::{LineLayout, RawItem, ReceiptExtractor, ReceiptParser};
