//! Handlers for the `/social-links` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::site_section::ReorderEntry;
use portfolio_db::models::social_link::{CreateSocialLink, UpdateSocialLink};
use portfolio_db::repositories::SocialLinkRepo;
use validator::Validate;

use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeHiddenParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/social-links
pub async fn list_links(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeHiddenParams>,
) -> AppResult<impl IntoResponse> {
    let include_hidden = params.include_hidden && auth.is_some();
    let links = SocialLinkRepo::list(&state.pool, include_hidden).await?;

    Ok(Json(DataResponse { data: links }))
}

/// POST /api/v1/social-links
pub async fn create_link(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSocialLink>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| validation_error(&e))?;

    let link = SocialLinkRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// PUT /api/v1/social-links/{id}
pub async fn update_link(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSocialLink>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| validation_error(&e))?;

    let link = SocialLinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SocialLink",
            id,
        }))?;

    Ok(Json(DataResponse { data: link }))
}

/// PUT /api/v1/social-links/reorder
pub async fn reorder_links(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(entries): Json<Vec<ReorderEntry>>,
) -> AppResult<StatusCode> {
    if entries.is_empty() {
        return Err(AppError::BadRequest("Reorder list must not be empty".into()));
    }
    SocialLinkRepo::reorder(&state.pool, &entries).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/social-links/{id}
pub async fn delete_link(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SocialLinkRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SocialLink",
            id,
        }))
    }
}
