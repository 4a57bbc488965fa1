use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id;
use crate::models::{resolve_media_type, DocumentKind, SummaryResponse, UploadedFile};
use crate::state::AppState;

pub const FILE_FIELD: &str = "file";

pub async fn summarize_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> AppResult<Json<SummaryResponse>> {
    let start = Instant::now();
    let request_id = request_id(&headers);

    info!(request_id = %request_id, "Starting summary request");

    let file = match read_upload(
        &mut multipart,
        state.config.max_file_size_bytes(),
        state.config.max_file_size_mb,
    )
    .await
    {
        Ok(file) => {
            info!(
                request_id = %request_id,
                file_name = %file.name,
                file_size = file.size(),
                kind = %file.kind,
                "Upload accepted"
            );
            file
        }
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "Upload rejected");
            return Err(e);
        }
    };

    let response = state.pipeline.run(file, &request_id).await?;

    info!(
        request_id = %request_id,
        total_time_ms = start.elapsed().as_millis() as u64,
        "Request completed successfully"
    );

    Ok(Json(response))
}

/// Admission control: exactly one PDF or DOCX part named `file`, non-empty
/// and within the size ceiling.
async fn read_upload(
    multipart: &mut Multipart,
    max_bytes: usize,
    limit_mb: usize,
) -> AppResult<UploadedFile> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit_mb))?
    {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let media_type = resolve_media_type(field.content_type(), &file_name);

        let kind = DocumentKind::from_mime(&media_type)
            .ok_or(AppError::UnsupportedMediaType { media_type })?;

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, limit_mb))?;

        if data.is_empty() {
            return Err(AppError::invalid_file("File is empty"));
        }

        if data.len() > max_bytes {
            return Err(AppError::FileTooLarge { limit: limit_mb });
        }

        return Ok(UploadedFile::new(file_name, kind, data));
    }

    Err(AppError::MissingFile)
}

fn multipart_error(err: MultipartError, limit_mb: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::FileTooLarge { limit: limit_mb }
    } else {
        AppError::invalid_file(format!("Failed to read multipart data: {}", err.body_text()))
    }
}
