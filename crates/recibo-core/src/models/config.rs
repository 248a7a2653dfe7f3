//! Configuration structures for the receipt pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the recibo pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReciboConfig {
    /// OCR backend configuration.
    pub ocr: OcrConfig,

    /// Receipt extraction configuration.
    pub extraction: ExtractionConfig,
}

/// OCR backend configuration.
///
/// The core never talks to an OCR service itself; these settings are
/// handed to whichever backend adapter the caller wires in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Cloud project identifier.
    pub project_id: Option<String>,

    /// Document processor identifier.
    pub processor_id: Option<String>,

    /// Processor location.
    pub location: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            processor_id: None,
            location: "us".to_string(),
        }
    }
}

/// Receipt extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Currency to report when no symbol is found in the transcript.
    pub default_currency: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_currency: "$".to_string(),
        }
    }
}

impl ReciboConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
