//! Identity handlers
//!
//! First-run detection, the one-time administrator setup, and login.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};

use crate::auth;
use crate::dto::identity::{CheckUsersResponse, CredentialsRequest, LoginResponse, ProfileResponse};
use crate::error::ApiError;
use crate::AppState;

/// Reports whether any account exists yet
///
/// Clients use this to decide between showing the login form and the
/// first-run setup screen.
pub async fn check_users(
    State(state): State<AppState>,
) -> Result<Json<CheckUsersResponse>, ApiError> {
    let exists = state.bootstrap.is_initialized().await?;
    Ok(Json(CheckUsersResponse { exists }))
}

/// Authenticates an account and issues a session token
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;

    let profile = state
        .sessions
        .login(&request.email, &request.password)
        .await?;

    let token = auth::create_token(
        &profile.email,
        profile.is_admin,
        &state.config.jwt_secret,
        state.config.jwt_expiration_secs,
    )?;

    Ok(Json(LoginResponse {
        email: profile.email,
        is_admin: profile.is_admin,
        token,
    }))
}

/// Creates the first administrator account
///
/// Succeeds exactly once per deployment. The response carries no token;
/// the client logs in with the same credentials afterwards.
pub async fn create_admin(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let Json(request) = payload?;

    let profile = state
        .bootstrap
        .create_first_admin(&request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(ProfileResponse::from(profile))))
}
