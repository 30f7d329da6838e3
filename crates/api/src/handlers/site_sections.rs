//! Handlers for the `/site-sections` resource (navigation and home-page
//! section ordering). The defaults are seeded by migration; admins may
//! add custom sections, edit labels, toggle visibility, and reorder.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::site_section::{CreateSiteSection, ReorderEntry, UpdateSiteSection};
use portfolio_db::repositories::SiteSectionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeHiddenParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/site-sections
///
/// The public navigation: visible sections in display order.
pub async fn list_sections(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeHiddenParams>,
) -> AppResult<impl IntoResponse> {
    let include_hidden = params.include_hidden && auth.is_some();
    let sections = SiteSectionRepo::list(&state.pool, include_hidden).await?;

    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/site-sections
///
/// Add a custom section. Duplicate section keys come back as 409.
pub async fn create_section(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSiteSection>,
) -> AppResult<impl IntoResponse> {
    if input.section_key.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            portfolio_core::locale::required("Section key", "معرف القسم"),
        )));
    }
    if input.label_en.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            portfolio_core::locale::required("Label", "التسمية"),
        )));
    }

    let section = SiteSectionRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/site-sections/{id}
pub async fn update_section(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSiteSection>,
) -> AppResult<impl IntoResponse> {
    let section = SiteSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteSection",
            id,
        }))?;

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/site-sections/{id}
pub async fn delete_section(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SiteSectionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SiteSection",
            id,
        }))
    }
}

/// PUT /api/v1/site-sections/reorder
pub async fn reorder_sections(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(entries): Json<Vec<ReorderEntry>>,
) -> AppResult<StatusCode> {
    if entries.is_empty() {
        return Err(AppError::BadRequest("Reorder list must not be empty".into()));
    }
    SiteSectionRepo::reorder(&state.pool, &entries).await?;
    Ok(StatusCode::NO_CONTENT)
}
