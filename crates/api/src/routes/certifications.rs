//! Route definitions for certifications.
//!
//! Mounted at `/certifications`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::certifications;
use crate::state::AppState;

/// Routes mounted at `/certifications`.
///
/// ```text
/// GET    /          -> list_certifications (public, ?include_hidden for auth)
/// POST   /          -> create_certification (admin only)
/// PUT    /reorder   -> reorder_certifications (admin only)
/// PUT    /{id}      -> update_certification (admin only)
/// DELETE /{id}      -> delete_certification (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(certifications::list_certifications).post(certifications::create_certification),
        )
        .route("/reorder", put(certifications::reorder_certifications))
        .route(
            "/{id}",
            put(certifications::update_certification)
                .delete(certifications::delete_certification),
        )
}
