//! Data models for receipts and pipeline configuration.

pub mod config;
pub mod receipt;

pub use config::{ExtractionConfig, OcrConfig, ReciboConfig};
pub use receipt::{
    LineItem, Merchant, OcrMetadata, PageInfo, ProcessingInfo, Receipt, ReceiptRecord,
};
