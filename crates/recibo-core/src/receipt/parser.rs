//! Receipt assembly: composing classification, extraction, and
//! normalization into a structured record.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::receipt::{OcrMetadata, ProcessingInfo, Receipt, ReceiptRecord};
use crate::ocr::OcrOutput;

use super::cascade::extract_items;
use super::classifier::transcript_lines;
use super::merchant::{extract_currency_or, extract_merchant, DEFAULT_CURRENCY};
use super::normalize::normalize;
use super::ReceiptExtractor;

/// Receipt parser: a pure transcript-to-record transformation.
///
/// The parser holds no OCR client and no mutable state; the same
/// transcript always yields the same record, the wall-clock timestamp
/// fields excepted. Instances are freely shareable across threads.
pub struct ReceiptParser {
    /// Currency reported when none is found in the transcript.
    default_currency: String,
}

impl ReceiptParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Set the fallback currency.
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    fn assemble(&self, ocr: &OcrOutput, now: DateTime<Utc>) -> ReceiptRecord {
        let lines = transcript_lines(&ocr.text);

        let raw_items = extract_items(&lines);
        let (items, total) = normalize(raw_items);
        let merchant = extract_merchant(&lines);
        let currency = extract_currency_or(&ocr.text, &self.default_currency);

        info!(
            items = items.len(),
            total,
            merchant = %merchant.name,
            "assembled receipt record"
        );

        ReceiptRecord {
            receipt: Receipt {
                items,
                total,
                currency,
                date: now,
                merchant,
            },
            metadata: OcrMetadata {
                confidence: ocr.confidence,
                pages: ocr.pages.clone(),
                processing: ProcessingInfo {
                    processor: ocr.processor_id.clone(),
                    timestamp: now,
                },
            },
            raw_text: ocr.text.clone(),
        }
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptExtractor for ReceiptParser {
    fn extract(&self, ocr: &OcrOutput) -> ReceiptRecord {
        self.assemble(ocr, Utc::now())
    }

    fn extract_from_text(&self, text: &str) -> ReceiptRecord {
        self.extract(&OcrOutput::from_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::PageInfo;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tabular_transcript_to_record() {
        let text = "Cantidad\nConcepto\nPrecio\n1\nCoca Cola\n3000\n2\nAgua\n1500";

        let record = ReceiptParser::new().extract_from_text(text);

        assert_eq!(record.receipt.items.len(), 2);
        assert_eq!(record.receipt.items[0].name, "Coca Cola");
        assert_eq!(record.receipt.items[0].subtotal, 3000);
        assert_eq!(record.receipt.items[1].subtotal, 3000);
        assert_eq!(record.receipt.total, 6000);
        assert_eq!(record.receipt.merchant.name, "Cantidad");
        assert_eq!(record.raw_text, text);
        assert!(record.validate().is_empty());
    }

    #[test]
    fn test_metadata_passthrough() {
        let ocr = OcrOutput {
            text: "Tienda\nCoca Cola 3000".to_string(),
            confidence: 0.95,
            pages: vec![PageInfo {
                width: 612.0,
                height: 792.0,
                page_number: 1,
            }],
            processor_id: Some("proc-1".to_string()),
        };

        let record = ReceiptParser::new().extract(&ocr);

        assert_eq!(record.metadata.confidence, 0.95);
        assert_eq!(record.metadata.pages.len(), 1);
        assert_eq!(
            record.metadata.processing.processor.as_deref(),
            Some("proc-1")
        );
        assert_eq!(record.metadata.processing.timestamp, record.receipt.date);
    }

    #[test]
    fn test_empty_transcript_degenerate_record() {
        let record = ReceiptParser::new().extract_from_text("");

        assert!(record.receipt.items.is_empty());
        assert_eq!(record.receipt.total, 0);
        assert_eq!(record.receipt.currency, "$");
        assert_eq!(record.receipt.merchant.name, "Unknown");
        assert_eq!(record.metadata.confidence, 0.0);
        assert!(record.metadata.pages.is_empty());
        assert!(record.metadata.processing.processor.is_none());
    }

    #[test]
    fn test_configured_default_currency() {
        let parser = ReceiptParser::new().with_default_currency("COP");
        let record = parser.extract_from_text("Tienda\nCoca Cola 3000");
        assert_eq!(record.receipt.currency, "COP");

        // A symbol in the transcript still wins over the configured default.
        let record = parser.extract_from_text("Tienda\nCoca Cola $ 3000");
        assert_eq!(record.receipt.currency, "$");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let parser = ReceiptParser::new();
        let text = "Tienda\n2\nCoca Cola 3000\nAgua 1500";

        let a = parser.extract_from_text(text);
        let b = parser.extract_from_text(text);

        assert_eq!(a.receipt.items, b.receipt.items);
        assert_eq!(a.receipt.total, b.receipt.total);
        assert_eq!(a.receipt.merchant, b.receipt.merchant);
        assert_eq!(a.raw_text, b.raw_text);
    }

    #[test]
    fn test_transcript_never_mutated() {
        let text = "  Tienda  \nCoca Cola 3000\n";
        let record = ReceiptParser::new().extract_from_text(text);
        // Trimming happens in extracted fields only; the stored
        // transcript is verbatim.
        assert_eq!(record.raw_text, text);
        assert_eq!(record.receipt.merchant.name, "Tienda");
    }
}
