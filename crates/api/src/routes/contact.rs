//! Route definitions for the contact form and admin inbox.
//!
//! Mounted at `/contact`. The form submission is the only public route;
//! everything under `/messages` is admin-only.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /                             -> submit_message (public)
/// GET    /messages                     -> list_messages (?unread_only, limit, offset)
/// GET    /messages/unread-count        -> unread_count
/// GET    /messages/export/csv          -> export_csv
/// PUT    /messages/{id}/read           -> set_read
/// DELETE /messages/{id}                -> delete_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::submit_message))
        .route("/messages", get(contact::list_messages))
        .route("/messages/unread-count", get(contact::unread_count))
        .route("/messages/export/csv", get(contact::export_csv))
        .route("/messages/{id}", delete(contact::delete_message))
        .route("/messages/{id}/read", put(contact::set_read))
}
