use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{info, warn};

use crate::models::HealthResponse;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let rate_limiting = state.limiter.stats();

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        model: state.pipeline.model().to_string(),
        rate_limiting,
    };

    info!(
        total_requests = rate_limiting.total_requests,
        available_permits = rate_limiting.available_permits,
        "Health check completed"
    );

    Json(response)
}

/// Readiness check: not ready while every request permit is taken.
pub async fn ready_handler(State(state): State<AppState>) -> StatusCode {
    if state.limiter.available_permits() > 0 {
        StatusCode::OK
    } else {
        warn!("Readiness check failed - no request permits available");
        StatusCode::SERVICE_UNAVAILABLE
    }
}
