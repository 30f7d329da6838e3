//! Handlers for blog comments and like toggles.
//!
//! Anyone can comment; comments land as `pending` and only show publicly
//! once approved. Likes are keyed by a visitor key: authenticated callers
//! get a stable account-derived key, anonymous visitors supply their own
//! opaque key (the frontend persists one per browser).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::roles::ROLE_ADMIN;
use portfolio_core::types::DbId;
use portfolio_db::models::blog_comment::{
    build_tree, CreateBlogComment, COMMENT_STATUS_APPROVED, COMMENT_STATUS_HIDDEN,
    COMMENT_STATUS_PENDING,
};
use portfolio_db::repositories::{BlogCommentRepo, BlogPostRepo, LikeRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireWriter;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for like toggles from anonymous visitors.
#[derive(Debug, Default, Deserialize)]
pub struct LikeRequest {
    pub visitor_key: Option<String>,
}

/// Request body for `PUT /blog/comments/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct CommentStatusRequest {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Public comment endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/blog/posts/{id}/comments
///
/// Approved comments assembled into a reply tree.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_published_post(&state, post_id).await?;

    let comments = BlogCommentRepo::list_approved_for_post(&state.pool, post_id).await?;

    Ok(Json(DataResponse {
        data: build_tree(comments),
    }))
}

/// POST /api/v1/blog/posts/{id}/comments
///
/// Submit a comment. Lands as `pending` until moderated.
pub async fn create_comment(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<CreateBlogComment>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| validation_error(&e))?;

    require_published_post(&state, post_id).await?;

    // A reply must target a comment on the same post.
    if let Some(parent_id) = input.parent_id {
        let parent = BlogCommentRepo::find_by_id(&state.pool, parent_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "BlogComment",
                id: parent_id,
            }))?;
        if parent.post_id != post_id {
            return Err(AppError::Core(CoreError::validation(
                "Parent comment belongs to a different post",
                "التعليق الأصلي يعود لتدوينة أخرى",
            )));
        }
    }

    let user_id = auth.as_ref().map(|u| u.user_id);
    let comment = BlogCommentRepo::create(&state.pool, post_id, user_id, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

// ---------------------------------------------------------------------------
// Like toggles
// ---------------------------------------------------------------------------

/// POST /api/v1/blog/posts/{id}/like
///
/// Toggle a like on a post. Returns `{ liked, like_count }`.
pub async fn toggle_post_like(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<LikeRequest>,
) -> AppResult<impl IntoResponse> {
    require_published_post(&state, post_id).await?;

    let key = resolve_visitor_key(&auth, &input)?;
    let (liked, like_count) = LikeRepo::toggle_post_like(&state.pool, post_id, &key).await?;

    Ok(Json(DataResponse {
        data: serde_json::json!({ "liked": liked, "like_count": like_count }),
    }))
}

/// POST /api/v1/blog/comments/{id}/like
///
/// Toggle a like on a comment. Returns `{ liked, like_count }`.
pub async fn toggle_comment_like(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
    Json(input): Json<LikeRequest>,
) -> AppResult<impl IntoResponse> {
    let comment = BlogCommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogComment",
            id: comment_id,
        }))?;
    if comment.status != COMMENT_STATUS_APPROVED {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BlogComment",
            id: comment_id,
        }));
    }

    let key = resolve_visitor_key(&auth, &input)?;
    let (liked, like_count) = LikeRepo::toggle_comment_like(&state.pool, comment_id, &key).await?;

    Ok(Json(DataResponse {
        data: serde_json::json!({ "liked": liked, "like_count": like_count }),
    }))
}

// ---------------------------------------------------------------------------
// Moderation
// ---------------------------------------------------------------------------

/// GET /api/v1/blog/posts/{id}/comments/all
///
/// Every comment on a post regardless of status. Writers only for their
/// own posts; admins everywhere.
pub async fn list_comments_moderation(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    super::blog::require_post_access(&state, &user, post_id).await?;

    let comments = BlogCommentRepo::list_for_post_all(&state.pool, post_id).await?;

    Ok(Json(DataResponse { data: comments }))
}

/// GET /api/v1/blog/comments/pending
///
/// The global moderation queue. Admin sees everything; a writer sees the
/// queue filtered to comments on their own posts.
pub async fn list_pending(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pending = BlogCommentRepo::list_pending(&state.pool).await?;

    let visible = if user.role == ROLE_ADMIN {
        pending
    } else {
        let own = BlogPostRepo::list_all(&state.pool, Some(user.user_id)).await?;
        let own_ids: std::collections::HashSet<DbId> = own.iter().map(|p| p.id).collect();
        pending
            .into_iter()
            .filter(|c| own_ids.contains(&c.post_id))
            .collect()
    };

    Ok(Json(DataResponse { data: visible }))
}

/// PUT /api/v1/blog/comments/{id}/status
///
/// Approve or hide a comment.
pub async fn set_comment_status(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CommentStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let allowed = [
        COMMENT_STATUS_PENDING,
        COMMENT_STATUS_APPROVED,
        COMMENT_STATUS_HIDDEN,
    ];
    if !allowed.contains(&input.status.as_str()) {
        return Err(AppError::Core(CoreError::validation(
            format!("Invalid status '{}'", input.status),
            format!("الحالة '{}' غير صالحة", input.status),
        )));
    }

    let comment = BlogCommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogComment",
            id,
        }))?;

    // Writers may only moderate comments on posts they own.
    super::blog::require_post_access(&state, &user, comment.post_id).await?;

    let comment = BlogCommentRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogComment",
            id,
        }))?;

    tracing::info!(
        comment_id = id,
        status = %comment.status,
        user_id = user.user_id,
        "Comment moderated",
    );

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /api/v1/blog/comments/{id}
pub async fn delete_comment(
    RequireWriter(user): RequireWriter,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let comment = BlogCommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogComment",
            id,
        }))?;

    super::blog::require_post_access(&state, &user, comment.post_id).await?;

    let deleted = BlogCommentRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BlogComment",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Engagement endpoints only apply to live posts.
async fn require_published_post(state: &AppState, post_id: DbId) -> AppResult<()> {
    let post = BlogPostRepo::find_by_id(&state.pool, post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id: post_id,
        }))?;
    if post.status != portfolio_db::models::blog_post::POST_STATUS_PUBLISHED {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id: post_id,
        }));
    }
    Ok(())
}

/// Authenticated callers like under a stable account key; anonymous
/// visitors must supply their own.
fn resolve_visitor_key(auth: &Option<AuthUser>, input: &LikeRequest) -> AppResult<String> {
    if let Some(user) = auth {
        return Ok(user.visitor_key());
    }
    match input.visitor_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() && key.len() <= 128 => Ok(key.to_string()),
        _ => Err(AppError::Core(CoreError::validation(
            "visitor_key is required for anonymous likes",
            "مفتاح الزائر مطلوب للإعجاب دون تسجيل دخول",
        ))),
    }
}
