//! Route definitions for offered services.
//!
//! Mounted at `/services`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /          -> list_services (public, ?include_hidden for auth)
/// POST   /          -> create_service (admin only)
/// PUT    /reorder   -> reorder_services (admin only)
/// PUT    /{id}      -> update_service (admin only)
/// DELETE /{id}      -> delete_service (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list_services).post(services::create_service))
        .route("/reorder", put(services::reorder_services))
        .route(
            "/{id}",
            put(services::update_service).delete(services::delete_service),
        )
}
