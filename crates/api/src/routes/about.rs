//! Route definitions for the about singleton.
//!
//! Mounted at `/about`.

use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes mounted at `/about`.
///
/// ```text
/// GET    /    -> get_about (public)
/// PUT    /    -> update_about (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(about::get_about).put(about::update_about))
}
