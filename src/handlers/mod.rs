pub mod health;
pub mod summarize;

pub use health::*;
pub use summarize::*;

use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::error::AppError;
use crate::middleware::{logging_middleware, rate_limit_middleware};
use crate::services::extractor::panic_message;
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_file_size_bytes() + MULTIPART_OVERHEAD_BYTES;

    let api = Router::new()
        .route("/api/summarize", post(summarize_handler))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(DefaultBodyLimit::max(body_limit));

    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .merge(api)
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(logging_middleware))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    AppError::internal(format!("Unhandled panic: {}", panic_message(err.as_ref()))).into_response()
}
