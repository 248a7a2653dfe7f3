//! Receipt extraction engine.
//!
//! Pipeline: non-blank transcript lines → layout classification →
//! pattern cascade → normalized line items → assembled record.

pub mod cascade;
pub mod classifier;
pub mod merchant;
pub mod normalize;
mod parser;
pub mod patterns;

pub use cascade::{extract_items, RawItem};
pub use classifier::{classify, transcript_lines, LineLayout};
pub use merchant::{extract_currency, extract_merchant, DEFAULT_CURRENCY};
pub use normalize::normalize;
pub use parser::ReceiptParser;

use crate::models::receipt::ReceiptRecord;
use crate::ocr::OcrOutput;

/// Trait for receipt extractors.
///
/// Extraction is total: data-quality problems degrade to fewer or zero
/// items, never to an error. Callers wanting to flag "nothing
/// extracted" should check `record.receipt.items.is_empty()`.
pub trait ReceiptExtractor {
    /// Build a receipt record from an OCR result.
    fn extract(&self, ocr: &OcrOutput) -> ReceiptRecord;

    /// Build a receipt record from a bare transcript.
    fn extract_from_text(&self, text: &str) -> ReceiptRecord;
}
