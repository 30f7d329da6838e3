//! Route definitions for skills.
//!
//! Mounted at `/skills`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /          -> list_skills (public, ?include_hidden for auth)
/// POST   /          -> create_skill (admin only)
/// PUT    /reorder   -> reorder_skills (admin only)
/// PUT    /{id}      -> update_skill (admin only)
/// DELETE /{id}      -> delete_skill (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list_skills).post(skills::create_skill))
        .route("/reorder", put(skills::reorder_skills))
        .route("/{id}", put(skills::update_skill).delete(skills::delete_skill))
}
