use serde::{Deserialize, Serialize};

pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryResponse {
    pub summary: String,
    pub status: String,
    #[serde(rename = "fileSize")]
    pub file_size: String,
}

impl SummaryResponse {
    pub fn new(summary: String, file_size_bytes: usize) -> Self {
        Self {
            summary,
            status: SUCCESS_STATUS.to_string(),
            file_size: format_file_size(file_size_bytes),
        }
    }
}

/// Formats a byte count as mebibytes with two decimals, e.g. `"2.00 MB"`.
pub fn format_file_size(bytes: usize) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub model: String,
    pub rate_limiting: RateLimitStats,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitStats {
    pub total_requests: u64,
    pub rejected_requests: u64,
    pub available_permits: usize,
}
