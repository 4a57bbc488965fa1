use std::any::Any;
use thiserror::Error;

use crate::models::DocumentKind;
use crate::services::docx_processor::DocxProcessor;
use crate::services::pdf_processor::PdfProcessor;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to parse {kind} document: {cause}")]
    Parse { kind: DocumentKind, cause: String },

    #[error("Document contains no readable text")]
    EmptyContent,
}

/// Plain text pulled out of a document. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: impl AsRef<str>) -> Result<Self, ExtractionError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExtractionError::EmptyContent);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Extracts the text layer of `content` using the handler for `kind`.
///
/// CPU-bound; callers on an async runtime should run it on a blocking thread.
pub fn extract(content: &[u8], kind: DocumentKind) -> Result<ExtractedText, ExtractionError> {
    let raw = match kind {
        DocumentKind::Pdf => PdfProcessor::extract_text(content)?,
        DocumentKind::Docx => DocxProcessor::extract_text(content)?,
    };
    ExtractedText::new(raw)
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
