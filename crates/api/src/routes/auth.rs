//! Route definitions for authentication.
//!
//! Mounted at `/auth`. The refresh token travels in an HttpOnly cookie
//! scoped to this path, so refresh and logout never see it in a body.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /login     -> login (public)
/// POST   /refresh   -> refresh (public, reads refresh cookie)
/// POST   /logout    -> logout (requires auth)
/// GET    /me        -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}
