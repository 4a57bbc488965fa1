use std::fmt::Display;
use std::panic::{self, UnwindSafe};
use std::time::Instant;

use crate::models::DocumentKind;
use crate::services::extractor::{panic_message, ExtractionError};

pub struct PdfProcessor;

impl PdfProcessor {
    /// Concatenated text layer of every page. No OCR is attempted.
    pub fn extract_text(content: &[u8]) -> Result<String, ExtractionError> {
        let start = Instant::now();

        tracing::info!("Starting PDF text extraction ({} bytes)", content.len());

        // pdf-extract panics on some malformed font and encoding tables
        let text = Self::guarded(|| pdf_extract::extract_text_from_mem(content))?;

        tracing::info!(
            characters = text.len(),
            processing_time_ms = start.elapsed().as_millis() as u64,
            "PDF text extraction completed"
        );

        Ok(text)
    }

    /// Runs `parse`, turning both its error and a panic inside it into
    /// [`ExtractionError::Parse`].
    pub fn guarded<E, F>(parse: F) -> Result<String, ExtractionError>
    where
        E: Display,
        F: FnOnce() -> Result<String, E> + UnwindSafe,
    {
        match panic::catch_unwind(parse) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => {
                tracing::warn!("PDF text extraction failed: {}", e);
                Err(ExtractionError::Parse {
                    kind: DocumentKind::Pdf,
                    cause: e.to_string(),
                })
            }
            Err(payload) => {
                let cause = panic_message(payload.as_ref());
                tracing::error!("PDF parser aborted: {}", cause);
                Err(ExtractionError::Parse {
                    kind: DocumentKind::Pdf,
                    cause: format!("PDF parser aborted: {}", cause),
                })
            }
        }
    }
}
