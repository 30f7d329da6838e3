//! Handlers for the `/skills` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::site_section::ReorderEntry;
use portfolio_db::models::skill::{CreateSkill, UpdateSkill};
use portfolio_db::repositories::SkillRepo;
use validator::Validate;

use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeHiddenParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/skills
///
/// Public list grouped by category then display order.
pub async fn list_skills(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeHiddenParams>,
) -> AppResult<impl IntoResponse> {
    let include_hidden = params.include_hidden && auth.is_some();
    let skills = SkillRepo::list(&state.pool, include_hidden).await?;

    Ok(Json(DataResponse { data: skills }))
}

/// POST /api/v1/skills
pub async fn create_skill(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| validation_error(&e))?;

    let skill = SkillRepo::create(&state.pool, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// PUT /api/v1/skills/{id}
pub async fn update_skill(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| validation_error(&e))?;

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;

    Ok(Json(DataResponse { data: skill }))
}

/// PUT /api/v1/skills/reorder
pub async fn reorder_skills(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(entries): Json<Vec<ReorderEntry>>,
) -> AppResult<StatusCode> {
    if entries.is_empty() {
        return Err(AppError::BadRequest("Reorder list must not be empty".into()));
    }
    SkillRepo::reorder(&state.pool, &entries).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/skills/{id}
pub async fn delete_skill(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }))
    }
}
