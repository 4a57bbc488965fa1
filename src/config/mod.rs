use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

pub mod generation;

pub use generation::{GenerationConfig, HarmBlockThreshold, HarmCategory, SafetySetting};

/// Process-wide settings, resolved once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub max_file_size_mb: usize,
    pub max_concurrent_requests: usize,
    pub worker_threads: usize,
    pub generation_timeout_seconds: u64,
    pub max_source_chars: usize,
    pub static_dir: String,
    pub google: GoogleCloudConfig,
}

/// Identity of the Vertex AI project the summaries are generated in.
#[derive(Debug, Clone)]
pub struct GoogleCloudConfig {
    pub project: String,
    pub location: String,
    pub credentials_path: String,
    pub model: String,
    pub endpoint: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_server_host")]
    server_host: String,
    #[serde(default = "default_server_port")]
    server_port: u16,
    #[serde(default)]
    port: Option<String>,
    #[serde(default = "default_max_file_size_mb")]
    max_file_size_mb: usize,
    #[serde(default = "default_max_concurrent_requests")]
    max_concurrent_requests: usize,
    #[serde(default = "default_worker_threads")]
    worker_threads: usize,
    #[serde(default = "default_generation_timeout_seconds")]
    generation_timeout_seconds: u64,
    #[serde(default = "default_max_source_chars")]
    max_source_chars: usize,
    #[serde(default = "default_static_dir")]
    static_dir: String,
    #[serde(default)]
    google_cloud_project: Option<String>,
    #[serde(default)]
    google_cloud_location: Option<String>,
    #[serde(default)]
    google_application_credentials: Option<String>,
    #[serde(default = "default_model")]
    gemini_model: String,
    #[serde(default)]
    vertex_endpoint: Option<String>,
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_max_file_size_mb() -> usize {
    50
}

fn default_max_concurrent_requests() -> usize {
    100
}

fn default_worker_threads() -> usize {
    4
}

fn default_generation_timeout_seconds() -> u64 {
    600
}

fn default_max_source_chars() -> usize {
    2_000_000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_model() -> String {
    "gemini-2.5-pro".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_source(config::Environment::default())
    }

    /// Builds the configuration from an explicit environment source.
    ///
    /// Fails when any of the Google Cloud settings is absent: the service has
    /// nothing to do without a model backend, so startup must not proceed.
    pub fn from_source(source: config::Environment) -> Result<Self> {
        let raw: RawConfig = config::Config::builder()
            .add_source(source)
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Failed to parse configuration")?;

        let mut missing = Vec::new();
        let project = required(raw.google_cloud_project, "GOOGLE_CLOUD_PROJECT", &mut missing);
        let location = required(raw.google_cloud_location, "GOOGLE_CLOUD_LOCATION", &mut missing);
        let credentials_path = required(
            raw.google_application_credentials,
            "GOOGLE_APPLICATION_CREDENTIALS",
            &mut missing,
        );
        if !missing.is_empty() {
            return Err(anyhow!(
                "Missing required configuration: {}",
                missing.join(", ")
            ));
        }

        let server_port = match raw.port.as_deref().map(str::parse::<u16>) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                warn!("Failed to parse PORT: {} (using SERVER_PORT: {})", e, raw.server_port);
                raw.server_port
            }
            None => raw.server_port,
        };

        let config = Config {
            server_host: raw.server_host,
            server_port,
            max_file_size_mb: raw.max_file_size_mb,
            max_concurrent_requests: raw.max_concurrent_requests,
            worker_threads: raw.worker_threads,
            generation_timeout_seconds: raw.generation_timeout_seconds,
            max_source_chars: raw.max_source_chars,
            static_dir: raw.static_dir,
            google: GoogleCloudConfig {
                project,
                location,
                credentials_path,
                model: raw.gemini_model,
                endpoint: raw.vertex_endpoint.filter(|e| !e.trim().is_empty()),
            },
        };

        config.validate()?;

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server_port == 0 {
            return Err(anyhow!("SERVER_PORT must be greater than 0"));
        }
        if self.max_file_size_mb == 0 {
            return Err(anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }
        if self.max_concurrent_requests == 0 {
            return Err(anyhow!("MAX_CONCURRENT_REQUESTS must be greater than 0"));
        }
        if self.worker_threads == 0 {
            return Err(anyhow!("WORKER_THREADS must be greater than 0"));
        }
        if self.generation_timeout_seconds == 0 {
            return Err(anyhow!("GENERATION_TIMEOUT_SECONDS must be greater than 0"));
        }
        if self.max_source_chars == 0 {
            return Err(anyhow!("MAX_SOURCE_CHARS must be greater than 0"));
        }
        Ok(())
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }

    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig::for_model(&self.google.model)
    }
}

fn required(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(v) => v,
        None => {
            missing.push(name);
            String::new()
        }
    }
}
