use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::middleware::RequestLimiter;
use crate::services::{
    ServiceAccountKey, ServiceAccountTokenSource, Summarizer, SummaryPipeline, VertexClient,
};

const TOKEN_EXCHANGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a request handler needs. Built once at startup, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<SummaryPipeline>,
    pub limiter: Arc<RequestLimiter>,
}

impl AppState {
    pub fn new(config: Config, summarizer: Arc<dyn Summarizer>) -> Self {
        let pipeline = SummaryPipeline::new(summarizer, config.max_source_chars);
        let limiter = RequestLimiter::new(config.max_concurrent_requests);

        Self {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            limiter: Arc::new(limiter),
        }
    }

    /// Startup wiring for the Vertex AI backend.
    ///
    /// Reads the service-account key named by the configuration; a missing or
    /// unusable key is a startup failure, not a per-request error.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let key = ServiceAccountKey::from_file(&config.google.credentials_path)?;

        if let Some(key_project) = key.project_id.as_deref() {
            if key_project != config.google.project {
                warn!(
                    key_project = %key_project,
                    project = %config.google.project,
                    "Service account belongs to a different project than GOOGLE_CLOUD_PROJECT"
                );
            }
        }

        let token_http = reqwest::Client::builder()
            .timeout(TOKEN_EXCHANGE_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for token exchange")?;
        let tokens = Arc::new(ServiceAccountTokenSource::new(key, token_http)?);

        info!(client_email = %tokens.client_email(), "Loaded service account credentials");

        let client = VertexClient::new(
            &config.google,
            config.generation(),
            tokens,
            Duration::from_secs(config.generation_timeout_seconds),
        )?;

        info!(endpoint = %client.endpoint(), "Model backend configured");

        Ok(Self::new(config, Arc::new(client)))
    }
}
