pub mod types;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::{GenerationConfig, GoogleCloudConfig};
use crate::services::google_auth::TokenSource;
use crate::services::summarizer::{BackendError, Summarizer};

pub use types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// Client for the Vertex AI `generateContent` endpoint of one model.
pub struct VertexClient {
    http: reqwest::Client,
    endpoint: String,
    generation: GenerationConfig,
    tokens: Arc<dyn TokenSource>,
    timeout: Duration,
}

impl VertexClient {
    pub fn new(
        google: &GoogleCloudConfig,
        generation: GenerationConfig,
        tokens: Arc<dyn TokenSource>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the model backend")?;

        let endpoint = generate_content_url(
            google.endpoint.as_deref(),
            &google.project,
            &google.location,
            &generation.model,
        );

        Ok(Self {
            http,
            endpoint,
            generation,
            tokens,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            BackendError::request(err.to_string())
        }
    }
}

/// `location = "global"` has no regional host prefix.
pub fn generate_content_url(base: Option<&str>, project: &str, location: &str, model: &str) -> String {
    let base = match base {
        Some(base) => base.trim_end_matches('/').to_string(),
        None if location == "global" => "https://aiplatform.googleapis.com".to_string(),
        None => format!("https://{}-aiplatform.googleapis.com", location),
    };

    format!(
        "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
        base, project, location, model
    )
}

fn describe_error_response(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let code = envelope.error.code.unwrap_or(status.as_u16());
            match envelope.error.status {
                Some(kind) => format!("{} {}: {}", code, kind, envelope.error.message),
                None => format!("{}: {}", code, envelope.error.message),
            }
        }
        Err(_) if body.trim().is_empty() => format!("status {}", status),
        Err(_) => format!("status {}: {}", status, body.trim()),
    }
}

#[async_trait]
impl Summarizer for VertexClient {
    async fn summarize(&self, prompt: &str) -> Result<String, BackendError> {
        let start = Instant::now();
        let token = self.tokens.access_token().await?;
        let body = GenerateContentRequest::new(prompt, &self.generation);

        debug!(
            model = %self.generation.model,
            prompt_chars = prompt.len(),
            "Sending generation request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let cause = describe_error_response(status, &text);
            warn!(status = %status, cause = %cause, "Model backend rejected the request");
            return Err(BackendError::request(cause));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                BackendError::empty(format!("response body could not be decoded: {}", e))
            }
        })?;

        let summary = parsed.into_text()?;

        info!(
            model = %self.generation.model,
            summary_chars = summary.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Generation completed"
        );

        Ok(summary)
    }

    fn model(&self) -> &str {
        &self.generation.model
    }
}
