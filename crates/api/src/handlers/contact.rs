//! Handlers for the contact form and admin inbox.

use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::contact_message::{ContactListParams, CreateContactMessage};
use portfolio_db::repositories::ContactMessageRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /contact/messages/{id}/read`.
#[derive(Debug, Deserialize)]
pub struct SetReadRequest {
    pub is_read: bool,
}

/// POST /api/v1/contact
///
/// Public contact form submission. Returns 201 with the stored message id.
pub async fn submit_message(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| validation_error(&e))?;

    let message = ContactMessageRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: serde_json::json!({ "id": message.id }),
        }),
    ))
}

/// GET /api/v1/contact/messages
///
/// Admin inbox: newest first, `?unread_only=true` to filter, paginated.
pub async fn list_messages(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> AppResult<impl IntoResponse> {
    let messages = ContactMessageRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/v1/contact/messages/unread-count
pub async fn unread_count(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = ContactMessageRepo::count_unread(&state.pool).await?;
    Ok(Json(DataResponse {
        data: serde_json::json!({ "unread": count }),
    }))
}

/// PUT /api/v1/contact/messages/{id}/read
pub async fn set_read(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetReadRequest>,
) -> AppResult<StatusCode> {
    let updated = ContactMessageRepo::set_read(&state.pool, id, input.is_read).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))
    }
}

/// DELETE /api/v1/contact/messages/{id}
pub async fn delete_message(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ContactMessageRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))
    }
}

/// GET /api/v1/contact/messages/export/csv
///
/// Download the whole inbox as CSV.
pub async fn export_csv(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let csv = ContactMessageRepo::export_csv(&state.pool).await?;

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                axum::http::header::CONTENT_DISPOSITION,
                "attachment; filename=\"contact_messages.csv\"",
            ),
        ],
        csv,
    ))
}
