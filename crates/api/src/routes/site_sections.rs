//! Route definitions for site sections (navigation + home-page ordering).
//!
//! Mounted at `/site-sections`. The defaults are seeded by migration;
//! admins may add and remove custom sections.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::site_sections;
use crate::state::AppState;

/// Routes mounted at `/site-sections`.
///
/// ```text
/// GET    /          -> list_sections (public, ?include_hidden for auth)
/// POST   /          -> create_section (admin only)
/// PUT    /reorder   -> reorder_sections (admin only)
/// PUT    /{id}      -> update_section (admin only)
/// DELETE /{id}      -> delete_section (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(site_sections::list_sections).post(site_sections::create_section),
        )
        .route("/reorder", put(site_sections::reorder_sections))
        .route(
            "/{id}",
            put(site_sections::update_section).delete(site_sections::delete_section),
        )
}
