//! Handlers for the `/auth` resource (login, refresh, logout).
//!
//! The refresh token never appears in a JSON body: it travels in an
//! HttpOnly cookie scoped to the auth routes, so page scripts cannot
//! read it. Access tokens are short-lived JWTs returned in the body.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::user::UserResponse;
use portfolio_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

/// Name of the HttpOnly refresh cookie.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Path the refresh cookie is scoped to. Set and removal cookies must
/// agree on this, or browsers will keep the original after logout.
pub const REFRESH_COOKIE_PATH: &str = "/api/v1/auth";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response returned by login and refresh.
///
/// The refresh token is delivered separately via the HttpOnly cookie.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns an access token and
/// sets the refresh cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<AuthResponse>)> {
    // 1. Find user by username.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    // 2. Check if the account is active.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Check if the account is temporarily locked.
    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    // 4. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        // 5. On failure: increment counter, lock if threshold exceeded.
        UserRepo::increment_failed_login(&state.pool, user.id).await?;

        let new_count = user.failed_login_count + 1;
        if new_count >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, lock_until).await?;
        }

        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    // 6. On success: reset failed count, set last_login_at.
    UserRepo::record_successful_login(&state.pool, user.id).await?;

    // 7. Generate tokens, create the session, and set the cookie.
    let (response, jar) = create_auth_response(&state, jar, user.id, &user.role, || {
        user.to_response()
    })
    .await?;

    Ok((jar, Json(response)))
}

/// POST /api/v1/auth/refresh
///
/// Exchange the refresh cookie for a new access token. The old session is
/// revoked and a fresh refresh cookie is issued (token rotation).
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<AuthResponse>)> {
    // 1. Read and hash the refresh cookie.
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing refresh token".into()))
        })?;
    let token_hash = hash_refresh_token(&refresh_token);

    // 2. Find matching active session.
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke old session (token rotation).
    SessionRepo::revoke(&state.pool, session.id).await?;

    // 4. Find user.
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 5. Generate new tokens and create a new session.
    let (response, jar) = create_auth_response(&state, jar, user.id, &user.role, || {
        user.to_response()
    })
    .await?;

    Ok((jar, Json(response)))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user and clear the refresh
/// cookie. Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    auth_user: AuthUser,
) -> AppResult<(CookieJar, StatusCode)> {
    SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    let jar = jar.remove(Cookie::build(REFRESH_COOKIE).path(REFRESH_COOKIE_PATH));
    Ok((jar, StatusCode::NO_CONTENT))
}

/// GET /api/v1/auth/me
///
/// Return the authenticated user's own profile.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    Ok(Json(user.to_response()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens, persist a session row, set the refresh
/// cookie, and build the response body.
async fn create_auth_response(
    state: &AppState,
    jar: CookieJar,
    user_id: DbId,
    role: &str,
    build_user: impl FnOnce() -> UserResponse,
) -> AppResult<(AuthResponse, CookieJar)> {
    let access_token = generate_access_token(user_id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = portfolio_db::models::session::CreateSession {
        user_id,
        refresh_token_hash: refresh_hash,
        expires_at,
        user_agent: None,
        ip_address: None,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    let cookie = Cookie::build((REFRESH_COOKIE, refresh_plaintext))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .secure(state.config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(
            state.config.jwt.refresh_token_expiry_days,
        ))
        .build();
    let jar = jar.add(cookie);

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok((
        AuthResponse {
            access_token,
            expires_in,
            user: build_user(),
        },
        jar,
    ))
}
