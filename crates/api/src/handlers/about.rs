//! Handlers for the `/about` resource (the singleton profile section).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use portfolio_db::models::about::UpdateAbout;
use portfolio_db::repositories::AboutRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/about
///
/// Public profile data for the home page.
pub async fn get_about(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let about = AboutRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: about }))
}

/// PUT /api/v1/about
///
/// Partial update of the profile. Empty strings are ignored so a form
/// submitted with untouched blank fields cannot wipe existing content.
pub async fn update_about(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateAbout>,
) -> AppResult<impl IntoResponse> {
    let about = AboutRepo::update(&state.pool, &input).await?;

    tracing::info!(user_id = admin.user_id, "About section updated");

    Ok(Json(DataResponse { data: about }))
}
