//! Handlers for blog categories and posts.
//!
//! Writers manage their own posts; admins manage everything. Publication
//! state gates public visibility: only `published` posts resolve on the
//! public list and detail endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::roles::ROLE_ADMIN;
use portfolio_core::types::DbId;
use portfolio_db::models::blog_category::{CreateBlogCategory, UpdateBlogCategory};
use portfolio_db::models::blog_post::{BlogPost, CreateBlogPost, PostListParams, UpdateBlogPost};
use portfolio_db::repositories::{BlogCategoryRepo, BlogPostRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireWriter};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /blog/posts/{id}/featured`.
#[derive(Debug, Deserialize)]
pub struct FeaturedRequest {
    pub is_featured: bool,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/blog/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = BlogCategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/blog/categories
pub async fn create_category(
    RequireWriter(_user): RequireWriter,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogCategory>,
) -> AppResult<impl IntoResponse> {
    if input.name_en.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            portfolio_core::locale::required("Name", "الاسم"),
        )));
    }

    let pool = state.pool.clone();
    let slug = super::unique_slug(input.slug.as_deref(), &input.name_en, move |s| {
        let pool = pool.clone();
        async move { BlogCategoryRepo::slug_exists(&pool, &s).await }
    })
    .await?;

    let category = BlogCategoryRepo::create(&state.pool, &input, &slug).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/blog/categories/{id}
pub async fn update_category(
    RequireWriter(_user): RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogCategory>,
) -> AppResult<impl IntoResponse> {
    let category = BlogCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogCategory",
            id,
        }))?;

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/blog/categories/{id}
///
/// Posts in the category become uncategorized; they are not deleted.
pub async fn delete_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BlogCategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BlogCategory",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Posts: public reads
// ---------------------------------------------------------------------------

/// GET /api/v1/blog/posts
///
/// Published posts, newest first. Supports `?category=slug`,
/// `?featured_only=true`, and `limit`/`offset`.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list_published(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/blog/posts/{slug}
///
/// Public post detail by slug. Each hit bumps the view counter.
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_slug_published(&state.pool, &slug)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;

    BlogPostRepo::increment_view_count(&state.pool, post.id).await?;

    Ok(Json(DataResponse { data: post }))
}

// ---------------------------------------------------------------------------
// Posts: writer / admin management
// ---------------------------------------------------------------------------

/// GET /api/v1/blog/posts/manage
///
/// Dashboard list including drafts. Admins see everything; writers see
/// only their own posts.
pub async fn list_manage(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let author_filter = if user.role == ROLE_ADMIN {
        None
    } else {
        Some(user.user_id)
    };
    let posts = BlogPostRepo::list_all(&state.pool, author_filter).await?;

    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/blog/posts
///
/// Create a draft. The slug comes from the English title when not given.
pub async fn create_post(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    if input.title_en.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            portfolio_core::locale::required("Title", "العنوان"),
        )));
    }

    let pool = state.pool.clone();
    let slug = super::unique_slug(input.slug.as_deref(), &input.title_en, move |s| {
        let pool = pool.clone();
        async move { BlogPostRepo::slug_exists(&pool, &s).await }
    })
    .await?;

    let post = BlogPostRepo::create(&state.pool, user.user_id, &input, &slug).await?;

    tracing::info!(post_id = post.id, user_id = user.user_id, "Blog post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/v1/blog/posts/{id}
pub async fn update_post(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    require_post_access(&state, &user, id).await?;

    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/v1/blog/posts/{id}/publish
pub async fn publish_post(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_post_access(&state, &user, id).await?;

    let post = BlogPostRepo::publish(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;

    tracing::info!(post_id = id, user_id = user.user_id, "Blog post published");

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/v1/blog/posts/{id}/unpublish
pub async fn unpublish_post(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_post_access(&state, &user, id).await?;

    let post = BlogPostRepo::unpublish(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;

    Ok(Json(DataResponse { data: post }))
}

/// PUT /api/v1/blog/posts/{id}/featured
///
/// Featuring is a site-wide editorial decision, so it stays admin-only.
pub async fn set_featured(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FeaturedRequest>,
) -> AppResult<StatusCode> {
    let updated = BlogPostRepo::set_featured(&state.pool, id, input.is_featured).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))
    }
}

/// DELETE /api/v1/blog/posts/{id}
///
/// Soft delete; engagement data stays in place.
pub async fn delete_post(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_post_access(&state, &user, id).await?;

    let deleted = BlogPostRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(post_id = id, user_id = user.user_id, "Blog post deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a post and reject writers touching posts they do not own.
/// Admins pass unconditionally.
pub(crate) async fn require_post_access(
    state: &AppState,
    user: &AuthUser,
    post_id: DbId,
) -> AppResult<BlogPost> {
    let post = BlogPostRepo::find_by_id(&state.pool, post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id: post_id,
        }))?;

    if user.role != ROLE_ADMIN && post.author_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only manage your own posts".into(),
        )));
    }

    Ok(post)
}
