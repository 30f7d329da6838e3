//! Route definitions for the blog: categories, posts, comments, likes.
//!
//! Mounted at `/blog`. Public reads resolve posts by slug; management
//! endpoints use ids. `/posts/manage` and `/comments/pending` are static
//! segments, so they win over the `{id}` captures beside them.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{blog, comments};
use crate::state::AppState;

/// Routes mounted at `/blog`.
///
/// ```text
/// GET    /categories                  -> list_categories (public)
/// POST   /categories                  -> create_category (writer)
/// PUT    /categories/{id}             -> update_category (writer)
/// DELETE /categories/{id}             -> delete_category (admin only)
///
/// GET    /posts                       -> list_posts (public, ?category, ?featured_only)
/// POST   /posts                       -> create_post (writer)
/// GET    /posts/manage                -> list_manage (writer sees own, admin sees all)
/// GET    /posts/{slug}                -> get_post (public, by slug, bumps views)
/// PUT    /posts/{id}                  -> update_post (author or admin)
/// DELETE /posts/{id}                  -> delete_post (author or admin, soft)
/// POST   /posts/{id}/publish          -> publish_post (author or admin)
/// POST   /posts/{id}/unpublish        -> unpublish_post (author or admin)
/// PUT    /posts/{id}/featured         -> set_featured (admin only)
/// POST   /posts/{id}/like             -> toggle_post_like (public, visitor key)
///
/// GET    /posts/{id}/comments         -> list_comments (public, approved tree)
/// POST   /posts/{id}/comments         -> create_comment (public, lands pending)
/// GET    /posts/{id}/comments/all     -> list_comments_moderation (author or admin)
/// GET    /comments/pending            -> list_pending (writer sees own posts' queue)
/// PUT    /comments/{id}/status        -> set_comment_status (author or admin)
/// POST   /comments/{id}/like          -> toggle_comment_like (public, visitor key)
/// DELETE /comments/{id}               -> delete_comment (author or admin, soft)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(blog::list_categories).post(blog::create_category),
        )
        .route(
            "/categories/{id}",
            put(blog::update_category).delete(blog::delete_category),
        )
        .route("/posts", get(blog::list_posts).post(blog::create_post))
        .route("/posts/manage", get(blog::list_manage))
        .route(
            "/posts/{id}",
            get(blog::get_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route("/posts/{id}/publish", post(blog::publish_post))
        .route("/posts/{id}/unpublish", post(blog::unpublish_post))
        .route("/posts/{id}/featured", put(blog::set_featured))
        .route("/posts/{id}/like", post(comments::toggle_post_like))
        .route(
            "/posts/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/posts/{id}/comments/all",
            get(comments::list_comments_moderation),
        )
        .route("/comments/pending", get(comments::list_pending))
        .route("/comments/{id}", delete(comments::delete_comment))
        .route("/comments/{id}/status", put(comments::set_comment_status))
        .route("/comments/{id}/like", post(comments::toggle_comment_like))
}
