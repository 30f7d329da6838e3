//! Route definitions for projects and their image galleries.
//!
//! Mounted at `/projects`. The public detail endpoint resolves by slug;
//! management endpoints address records by id. Both share the `/{id}`
//! segment, so the handlers pick the path type they need.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list_projects (public, ?include_hidden for auth)
/// POST   /                          -> create_project (admin only)
/// PUT    /reorder                   -> reorder_projects (admin only)
/// GET    /{slug}                    -> get_project (public, by slug)
/// PUT    /{id}                      -> update_project (admin only)
/// DELETE /{id}                      -> delete_project (admin only)
/// PUT    /{id}/featured             -> set_featured (admin only)
/// GET    /{id}/images               -> list_images (public)
/// POST   /{id}/images               -> add_image (admin only)
/// PUT    /{id}/images/{image_id}    -> update_image (admin only)
/// DELETE /{id}/images/{image_id}    -> delete_image (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects).post(projects::create_project))
        .route("/reorder", put(projects::reorder_projects))
        .route(
            "/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/{id}/featured", put(projects::set_featured))
        .route(
            "/{id}/images",
            get(projects::list_images).post(projects::add_image),
        )
        .route(
            "/{id}/images/{image_id}",
            put(projects::update_image).delete(projects::delete_image),
        )
}
