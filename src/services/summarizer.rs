use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Model backend request failed: {cause}")]
    Request { cause: String },

    #[error("Model backend did not respond within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Model backend returned a malformed or empty response: {detail}")]
    EmptyResponse { detail: String },
}

impl BackendError {
    pub fn request(cause: impl Into<String>) -> Self {
        BackendError::Request {
            cause: cause.into(),
        }
    }

    pub fn empty(detail: impl Into<String>) -> Self {
        BackendError::EmptyResponse {
            detail: detail.into(),
        }
    }
}

/// A generative model that turns a prompt into summary text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// One request/response round trip. Never retried.
    async fn summarize(&self, prompt: &str) -> Result<String, BackendError>;

    /// Identifier of the model behind this summarizer.
    fn model(&self) -> &str;
}
