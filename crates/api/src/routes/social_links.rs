//! Route definitions for social links.
//!
//! Mounted at `/social-links`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::social_links;
use crate::state::AppState;

/// Routes mounted at `/social-links`.
///
/// ```text
/// GET    /          -> list_links (public, ?include_hidden for auth)
/// POST   /          -> create_link (admin only)
/// PUT    /reorder   -> reorder_links (admin only)
/// PUT    /{id}      -> update_link (admin only)
/// DELETE /{id}      -> delete_link (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(social_links::list_links).post(social_links::create_link))
        .route("/reorder", put(social_links::reorder_links))
        .route(
            "/{id}",
            put(social_links::update_link).delete(social_links::delete_link),
        )
}
