//! OCR backend boundary.
//!
//! The extraction engine consumes only what a backend produces: a raw
//! transcript plus optional confidence, page geometry, and processor
//! identity. Which backend produces it (cloud document AI, a local
//! engine) is an adapter decision made entirely outside this crate.

use serde::{Deserialize, Serialize};

use crate::error::OcrError;
use crate::models::config::OcrConfig;
use crate::models::receipt::PageInfo;

/// Output of one OCR invocation, the sole input contract of the
/// extraction engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrOutput {
    /// Full recognized text, newline-delimited.
    pub text: String,

    /// Overall recognition confidence (0.0 - 1.0).
    pub confidence: f32,

    /// Per-page geometry, if the backend reports it.
    pub pages: Vec<PageInfo>,

    /// Identifier of the processor that produced this output.
    #[serde(rename = "processorId")]
    pub processor_id: Option<String>,
}

impl OcrOutput {
    /// Wrap a bare transcript with no metadata.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Trait for OCR backend adapters.
pub trait OcrBackend {
    /// Recognize text in an image.
    fn recognize(&self, image: &[u8]) -> Result<OcrOutput, OcrError>;
}

/// Build the fully qualified processor resource name for a cloud
/// document-AI backend.
pub fn processor_name(config: &OcrConfig) -> Result<String, OcrError> {
    let project_id = config
        .project_id
        .as_deref()
        .ok_or_else(|| OcrError::MissingConfig("project_id".to_string()))?;
    let processor_id = config
        .processor_id
        .as_deref()
        .ok_or_else(|| OcrError::MissingConfig("processor_id".to_string()))?;

    Ok(format!(
        "projects/{}/locations/{}/processors/{}",
        project_id, config.location, processor_id
    ))
}
