//! Handler for media uploads (project screenshots, blog covers, CV files).
//!
//! Files land under `config.upload_dir` with a random name; the response
//! carries the public URL path the frontend stores on the owning record.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireWriter;
use crate::response::DataResponse;
use crate::state::AppState;

/// Extensions we accept. Everything else is rejected up front.
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "svg", "pdf"];

/// Hard cap per file. Matches the multipart body limit set on the route.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadResult {
    pub url: String,
    pub filename: String,
    pub size_bytes: usize,
}

/// POST /api/v1/uploads
///
/// Accept a single multipart file field, store it under a random name,
/// and return the public path.
pub async fn upload_file(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResult>>)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .ok_or_else(|| AppError::BadRequest("No file in upload request".into()))?;

    let original_name = field.file_name().unwrap_or("unnamed").to_string();

    let extension = original_name
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unsupported file type; allowed: {}",
                ALLOWED_EXTENSIONS.join(", ")
            ))
        })?;

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {} MB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let stored_name = format!("{}.{extension}", Uuid::new_v4());

    let upload_dir = std::path::Path::new(&state.config.upload_dir);
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let size_bytes = data.len();
    tokio::fs::write(upload_dir.join(&stored_name), &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let url = format!(
        "{}/{stored_name}",
        state.config.upload_public_prefix.trim_end_matches('/')
    );

    tracing::info!(
        user_id = user.user_id,
        filename = %original_name,
        stored = %stored_name,
        size_bytes,
        "File uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResult {
                url,
                filename: stored_name,
                size_bytes,
            },
        }),
    ))
}
