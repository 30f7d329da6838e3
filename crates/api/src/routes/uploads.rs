//! Route definitions for media uploads.
//!
//! Mounted at `/uploads`.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST   /    -> upload_file (writer, multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload_file))
        // Allow some headroom over the per-file cap for multipart framing.
        .layer(DefaultBodyLimit::max(uploads::MAX_UPLOAD_BYTES + 64 * 1024))
}
