//! Handlers for the `/certifications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::certification::{CreateCertification, UpdateCertification};
use portfolio_db::models::site_section::ReorderEntry;
use portfolio_db::repositories::CertificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeHiddenParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/certifications
pub async fn list_certifications(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeHiddenParams>,
) -> AppResult<impl IntoResponse> {
    let include_hidden = params.include_hidden && auth.is_some();
    let certifications = CertificationRepo::list(&state.pool, include_hidden).await?;

    Ok(Json(DataResponse {
        data: certifications,
    }))
}

/// POST /api/v1/certifications
pub async fn create_certification(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCertification>,
) -> AppResult<impl IntoResponse> {
    if input.title_en.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            portfolio_core::locale::required("Title", "العنوان"),
        )));
    }

    let certification = CertificationRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: certification,
        }),
    ))
}

/// PUT /api/v1/certifications/{id}
pub async fn update_certification(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCertification>,
) -> AppResult<impl IntoResponse> {
    let certification = CertificationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Certification",
            id,
        }))?;

    Ok(Json(DataResponse {
        data: certification,
    }))
}

/// PUT /api/v1/certifications/reorder
pub async fn reorder_certifications(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(entries): Json<Vec<ReorderEntry>>,
) -> AppResult<StatusCode> {
    if entries.is_empty() {
        return Err(AppError::BadRequest("Reorder list must not be empty".into()));
    }
    CertificationRepo::reorder(&state.pool, &entries).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/certifications/{id}
pub async fn delete_certification(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CertificationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Certification",
            id,
        }))
    }
}
