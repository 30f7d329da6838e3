//! Handlers for the `/projects` resource and its nested image gallery.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::project::{
    CreateProject, CreateProjectImage, UpdateProject, UpdateProjectImage,
};
use portfolio_db::models::site_section::ReorderEntry;
use portfolio_db::repositories::{ProjectImageRepo, ProjectRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeHiddenParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT .../featured`.
#[derive(Debug, Deserialize)]
pub struct FeaturedRequest {
    pub is_featured: bool,
}

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
///
/// Public list of visible projects. Authenticated callers may pass
/// `?include_hidden=true` to see hidden ones too.
pub async fn list_projects(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Query(params): Query<IncludeHiddenParams>,
) -> AppResult<impl IntoResponse> {
    let include_hidden = params.include_hidden && auth.is_some();
    let projects = ProjectRepo::list(&state.pool, include_hidden).await?;

    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{slug}
///
/// Public project detail with its image gallery, addressed by slug.
pub async fn get_project(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| not_found_by_slug(&slug))?;

    // Hidden projects only resolve for authenticated users.
    if !project.is_visible && auth.is_none() {
        return Err(not_found_by_slug(&slug));
    }

    let images = ProjectImageRepo::list_for_project(&state.pool, project.id).await?;

    Ok(Json(DataResponse {
        data: serde_json::json!({
            "project": project,
            "images": images,
        }),
    }))
}

/// POST /api/v1/projects
///
/// Create a project. The slug is generated from the English title when
/// not supplied; collisions get a numeric suffix.
pub async fn create_project(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    if input.title_en.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            portfolio_core::locale::required("Title", "العنوان"),
        )));
    }

    let pool = state.pool.clone();
    let slug = super::unique_slug(input.slug.as_deref(), &input.title_en, move |s| {
        let pool = pool.clone();
        async move { ProjectRepo::slug_exists(&pool, &s).await }
    })
    .await?;

    let project = ProjectRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(project_id = project.id, user_id = admin.user_id, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/projects/{id}
pub async fn update_project(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}/featured
pub async fn set_featured(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FeaturedRequest>,
) -> AppResult<StatusCode> {
    let updated = ProjectRepo::set_featured(&state.pool, id, input.is_featured).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// PUT /api/v1/projects/reorder
pub async fn reorder_projects(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(entries): Json<Vec<ReorderEntry>>,
) -> AppResult<StatusCode> {
    if entries.is_empty() {
        return Err(AppError::BadRequest("Reorder list must not be empty".into()));
    }
    ProjectRepo::reorder(&state.pool, &entries).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/projects/{id}
pub async fn delete_project(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, user_id = admin.user_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Project images
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{id}/images
pub async fn list_images(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // 404 for unknown projects rather than an empty list.
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let images = ProjectImageRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: images }))
}

/// POST /api/v1/projects/{id}/images
pub async fn add_image(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateProjectImage>,
) -> AppResult<impl IntoResponse> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let image = ProjectImageRepo::create(&state.pool, project_id, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: image })))
}

/// PUT /api/v1/projects/{id}/images/{image_id}
pub async fn update_image(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path((project_id, image_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateProjectImage>,
) -> AppResult<impl IntoResponse> {
    let image = ProjectImageRepo::update(&state.pool, project_id, image_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectImage",
            id: image_id,
        }))?;

    Ok(Json(DataResponse { data: image }))
}

/// DELETE /api/v1/projects/{id}/images/{image_id}
pub async fn delete_image(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path((project_id, image_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ProjectImageRepo::delete(&state.pool, project_id, image_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProjectImage",
            id: image_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Slug lookups map misses to a plain 404.
fn not_found_by_slug(_slug: &str) -> AppError {
    AppError::Database(sqlx::Error::RowNotFound)
}
