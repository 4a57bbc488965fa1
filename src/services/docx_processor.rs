use docx_rust::DocxFile;
use std::io::Cursor;
use std::time::Instant;

use crate::models::DocumentKind;
use crate::services::extractor::ExtractionError;

pub struct DocxProcessor;

impl DocxProcessor {
    /// Paragraph text of the main document part, one paragraph per line.
    pub fn extract_text(content: &[u8]) -> Result<String, ExtractionError> {
        let start = Instant::now();

        tracing::info!("Starting DOCX text extraction ({} bytes)", content.len());

        let file = DocxFile::from_reader(Cursor::new(content)).map_err(|e| {
            tracing::warn!("DOCX container could not be opened: {}", e);
            ExtractionError::Parse {
                kind: DocumentKind::Docx,
                cause: e.to_string(),
            }
        })?;

        let docx = file.parse().map_err(|e| {
            tracing::warn!("DOCX document part could not be parsed: {}", e);
            ExtractionError::Parse {
                kind: DocumentKind::Docx,
                cause: e.to_string(),
            }
        })?;

        let text = docx.document.body.text().replace("\r\n", "\n");

        tracing::info!(
            characters = text.len(),
            processing_time_ms = start.elapsed().as_millis() as u64,
            "DOCX text extraction completed"
        );

        Ok(text)
    }
}
