//! Receipt data models matching the wire format of the record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line item on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name as it appeared on the receipt.
    pub name: String,

    /// Unit price, in whole currency units as printed.
    pub price: i64,

    /// Quantity purchased.
    pub quantity: u32,

    /// Line subtotal: `quantity * price`.
    pub subtotal: i64,
}

/// Merchant information, best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// Merchant name, usually the first line of the receipt.
    pub name: String,
}

impl Default for Merchant {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
        }
    }
}

/// The structured receipt extracted from one transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Line items in extraction order.
    pub items: Vec<LineItem>,

    /// Grand total: sum of all line subtotals.
    pub total: i64,

    /// Detected currency symbol or code (default: "$").
    pub currency: String,

    /// Timestamp of extraction (ISO-8601 on the wire).
    pub date: DateTime<Utc>,

    /// Merchant information.
    pub merchant: Merchant,
}

/// Geometry of one scanned page as reported by the OCR backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Page width.
    #[serde(default)]
    pub width: f64,

    /// Page height.
    #[serde(default)]
    pub height: f64,

    /// 1-based page number.
    #[serde(rename = "pageNumber", default = "default_page_number")]
    pub page_number: u32,
}

fn default_page_number() -> u32 {
    1
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            page_number: 1,
        }
    }
}

/// Processing provenance for one OCR invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingInfo {
    /// Identifier of the OCR processor, if known. Serialized as `null`
    /// when absent, per the record store contract.
    pub processor: Option<String>,

    /// Wall-clock timestamp of the invocation.
    pub timestamp: DateTime<Utc>,
}

/// OCR metadata passed through to the persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrMetadata {
    /// Overall recognition confidence (0.0 - 1.0).
    pub confidence: f32,

    /// Per-page geometry.
    #[serde(default)]
    pub pages: Vec<PageInfo>,

    /// Processing provenance.
    pub processing: ProcessingInfo,
}

/// The unit of output: one structured receipt record per OCR invocation.
///
/// Constructed once, handed to the persistence collaborator, and never
/// mutated thereafter. Corrections require a new extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// The structured receipt.
    pub receipt: Receipt,

    /// OCR metadata.
    pub metadata: OcrMetadata,

    /// Verbatim transcript, always retained for audit.
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

impl ReceiptRecord {
    /// Validate the arithmetic invariants and return any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for item in &self.receipt.items {
            if item.subtotal != item.price * item.quantity as i64 {
                issues.push(format!(
                    "Subtotal mismatch for {}: {} != {} * {}",
                    item.name, item.subtotal, item.quantity, item.price
                ));
            }
        }

        let calculated: i64 = self.receipt.items.iter().map(|i| i.subtotal).sum();
        if calculated != self.receipt.total {
            issues.push(format!(
                "Item subtotal sum ({}) differs from total ({})",
                calculated, self.receipt.total
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_record() -> ReceiptRecord {
        ReceiptRecord {
            receipt: Receipt {
                items: vec![LineItem {
                    name: "Coca Cola".to_string(),
                    price: 3000,
                    quantity: 2,
                    subtotal: 6000,
                }],
                total: 6000,
                currency: "COP".to_string(),
                date: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
                merchant: Merchant {
                    name: "Tienda Don Pepe".to_string(),
                },
            },
            metadata: OcrMetadata {
                confidence: 0.95,
                pages: vec![PageInfo {
                    width: 612.0,
                    height: 792.0,
                    page_number: 1,
                }],
                processing: ProcessingInfo {
                    processor: None,
                    timestamp: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                        .unwrap()
                        .with_timezone(&Utc),
                },
            },
            raw_text: "Tienda Don Pepe\n2\nCoca Cola 3000".to_string(),
        }
    }

    #[test]
    fn test_wire_format_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert!(json["rawText"].is_string());
        assert_eq!(json["metadata"]["pages"][0]["pageNumber"], 1);
        // Absent processor must serialize as explicit null, not be omitted.
        assert!(json["metadata"]["processing"]["processor"].is_null());
        assert_eq!(json["receipt"]["items"][0]["subtotal"], 6000);
        assert_eq!(json["receipt"]["total"], 6000);
    }

    #[test]
    fn test_page_info_defaults() {
        let page: PageInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(page.width, 0.0);
        assert_eq!(page.height, 0.0);
        assert_eq!(page.page_number, 1);
    }

    #[test]
    fn test_validate_clean_record() {
        assert!(sample_record().validate().is_empty());
    }

    #[test]
    fn test_validate_detects_bad_total() {
        let mut record = sample_record();
        record.receipt.total = 9999;
        let issues = record.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("differs from total"));
    }

    #[test]
    fn test_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: ReceiptRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.receipt.items, record.receipt.items);
        assert_eq!(back.raw_text, record.raw_text);
    }
}
