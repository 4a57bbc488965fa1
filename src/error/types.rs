use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::middleware::current_request_id;
use crate::services::{BackendError, ExtractionError};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file was provided in the 'file' field")]
    MissingFile,

    #[error("Unsupported file type: {media_type}. Only PDF and DOCX documents are accepted")]
    UnsupportedMediaType { media_type: String },

    #[error("File too large: uploads are limited to {limit}MB")]
    FileTooLarge { limit: usize },

    #[error("Invalid file: {message}")]
    InvalidFile { message: String },

    #[error("The document does not contain readable text")]
    NoReadableText,

    #[error("Document text is too long: {chars} characters exceeds limit of {limit}")]
    SourceTooLong { chars: usize, limit: usize },

    #[error("Error processing file: {message}")]
    ProcessingError { message: String },

    #[error("Rate limit exceeded: maximum concurrent requests reached")]
    RateLimitExceeded,

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingFile => "MISSING_FILE",
            AppError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::InvalidFile { .. } => "INVALID_FILE",
            AppError::NoReadableText => "NO_READABLE_TEXT",
            AppError::SourceTooLong { .. } => "SOURCE_TOO_LONG",
            AppError::ProcessingError { .. } => "PROCESSING_ERROR",
            AppError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidFile { .. } => StatusCode::BAD_REQUEST,
            AppError::NoReadableText => StatusCode::BAD_REQUEST,
            AppError::SourceTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::ProcessingError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();
        let request_id = current_request_id().unwrap_or_else(|| Uuid::new_v4().to_string());
        let timestamp = chrono::Utc::now().to_rfc3339();

        tracing::error!(
            error_code = error_code,
            status_code = %status,
            request_id = %request_id,
            error_message = %message,
            "API error occurred"
        );

        let body = Json(json!({
            "status": "error",
            "error": {
                "code": error_code,
                "message": message,
                "request_id": request_id,
                "timestamp": timestamp
            }
        }));

        (status, body).into_response()
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::EmptyContent => AppError::NoReadableText,
            ExtractionError::Parse { .. } => AppError::ProcessingError {
                message: err.to_string(),
            },
        }
    }
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        AppError::ProcessingError {
            message: err.to_string(),
        }
    }
}

impl AppError {
    pub fn processing(message: impl Into<String>) -> Self {
        AppError::ProcessingError {
            message: message.into(),
        }
    }

    pub fn invalid_file(message: impl Into<String>) -> Self {
        AppError::InvalidFile {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
        }
    }
}
