//! Digestor academic summary service
//!
//! Accepts a PDF or DOCX upload, extracts its text layer and asks a Gemini
//! model on Vertex AI for an extensive academic summary of it.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::create_router;
pub use state::AppState;
