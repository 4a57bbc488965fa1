use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::RateLimitStats;
use crate::state::AppState;

/// Bounds the number of summary requests in flight at once.
pub struct RequestLimiter {
    semaphore: Semaphore,
    total_requests: AtomicU64,
    rejected_requests: AtomicU64,
}

impl RequestLimiter {
    pub fn new(max_concurrent_requests: usize) -> Self {
        info!(max_concurrent_requests, "Initializing request limiter");
        Self {
            semaphore: Semaphore::new(max_concurrent_requests),
            total_requests: AtomicU64::new(0),
            rejected_requests: AtomicU64::new(0),
        }
    }

    /// Fails fast instead of queueing when every permit is taken.
    pub fn try_acquire(&self) -> AppResult<SemaphorePermit<'_>> {
        let total = self.total_requests.fetch_add(1, Ordering::Relaxed) + 1;

        self.semaphore.try_acquire().map_err(|_| {
            let rejected = self.rejected_requests.fetch_add(1, Ordering::Relaxed) + 1;
            warn!(
                total_requests = total,
                rejected_requests = rejected,
                "Rate limit exceeded - too many concurrent requests"
            );
            AppError::RateLimitExceeded
        })
    }

    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }

    pub fn stats(&self) -> RateLimitStats {
        RateLimitStats {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            rejected_requests: self.rejected_requests.load(Ordering::Relaxed),
            available_permits: self.available_permits(),
        }
    }
}

pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let _permit = state.limiter.try_acquire()?;

    debug!(
        path = %path,
        available_permits = state.limiter.available_permits(),
        "Request permit acquired"
    );

    Ok(next.run(request).await)
}
