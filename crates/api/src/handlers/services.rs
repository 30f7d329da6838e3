//! Handlers for the `/services` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::service::{CreateService, UpdateService};
use portfolio_db::models::site_section::ReorderEntry;
use portfolio_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeHiddenParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/services
pub async fn list_services(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeHiddenParams>,
) -> AppResult<impl IntoResponse> {
    let include_hidden = params.include_hidden && auth.is_some();
    let services = ServiceRepo::list(&state.pool, include_hidden).await?;

    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/services
pub async fn create_service(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<impl IntoResponse> {
    if input.name_en.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            portfolio_core::locale::required("Name", "الاسم"),
        )));
    }

    let service = ServiceRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PUT /api/v1/services/{id}
pub async fn update_service(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;

    Ok(Json(DataResponse { data: service }))
}

/// PUT /api/v1/services/reorder
pub async fn reorder_services(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(entries): Json<Vec<ReorderEntry>>,
) -> AppResult<StatusCode> {
    if entries.is_empty() {
        return Err(AppError::BadRequest("Reorder list must not be empty".into()));
    }
    ServiceRepo::reorder(&state.pool, &entries).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/services/{id}
pub async fn delete_service(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ServiceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))
    }
}
