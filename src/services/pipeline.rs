use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{error, info};

use crate::error::{AppError, AppResult};
use crate::models::{SummaryResponse, UploadedFile};
use crate::services::extractor::{self, panic_message, ExtractedText};
use crate::services::prompt::build_prompt;
use crate::services::summarizer::Summarizer;

/// Upload-to-summary pipeline: extract, build the prompt, generate.
///
/// Stateless per request; the only shared piece is the summarizer handle.
pub struct SummaryPipeline {
    summarizer: Arc<dyn Summarizer>,
    max_source_chars: usize,
}

impl SummaryPipeline {
    pub fn new(summarizer: Arc<dyn Summarizer>, max_source_chars: usize) -> Self {
        Self {
            summarizer,
            max_source_chars,
        }
    }

    pub fn model(&self) -> &str {
        self.summarizer.model()
    }

    pub async fn run(&self, file: UploadedFile, request_id: &str) -> AppResult<SummaryResponse> {
        let start = Instant::now();
        let file_size = file.size();

        let text = self.extract(&file, request_id).await?;

        let chars = text.char_count();
        if chars > self.max_source_chars {
            return Err(AppError::SourceTooLong {
                chars,
                limit: self.max_source_chars,
            });
        }

        let prompt = build_prompt(text.as_str());

        let summary = self.summarizer.summarize(&prompt).await.map_err(|e| {
            error!(request_id = %request_id, error = %e, "Summary generation failed");
            AppError::from(e)
        })?;

        info!(
            request_id = %request_id,
            source_chars = chars,
            summary_chars = summary.len(),
            total_time_ms = start.elapsed().as_millis() as u64,
            "Summary generated"
        );

        Ok(SummaryResponse::new(summary, file_size))
    }

    async fn extract(&self, file: &UploadedFile, request_id: &str) -> AppResult<ExtractedText> {
        let content = file.content.clone();
        let kind = file.kind;

        let outcome = tokio::task::spawn_blocking(move || extractor::extract(&content, kind))
            .await
            .map_err(|e| {
                let err = extraction_aborted(e);
                error!(request_id = %request_id, error = %err, "Text extraction aborted");
                err
            })?;

        match outcome {
            Ok(text) => {
                info!(
                    request_id = %request_id,
                    file_name = %file.name,
                    kind = %kind,
                    text_length = text.as_str().len(),
                    "Text extracted"
                );
                Ok(text)
            }
            Err(e) => {
                error!(request_id = %request_id, file_name = %file.name, error = %e, "Text extraction failed");
                Err(e.into())
            }
        }
    }
}

/// A blocking extraction task that panicked or was cancelled.
pub fn extraction_aborted(err: JoinError) -> AppError {
    let cause = if err.is_panic() {
        panic_message(err.into_panic().as_ref())
    } else {
        err.to_string()
    };
    AppError::processing(format!("Text extraction aborted: {}", cause))
}
