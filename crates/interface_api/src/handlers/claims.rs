//! Claims handlers
//!
//! Submission and lookup are public; the review queue (list and update)
//! requires an administrator session.

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ClaimId;

use crate::auth::AdminClaims;
use crate::dto::claims::{ClaimResponse, SubmitClaimRequest, UpdateClaimRequest};
use crate::error::ApiError;
use crate::AppState;

/// Accepts a claim submission from a customer
pub async fn submit_claim(
    State(state): State<AppState>,
    payload: Result<Json<SubmitClaimRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let Json(request) = payload?;

    let claim = state.claims.submit(request.into_new_claim()).await?;

    Ok((StatusCode::CREATED, Json(ClaimResponse::from(claim))))
}

/// Lists all claims for the review queue, newest first
pub async fn list_claims(
    _admin: AdminClaims,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.list().await?;

    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = parse_claim_id(&id)?;

    let claim = state.claims.find(id).await?;

    Ok(Json(ClaimResponse::from(claim)))
}

/// Applies a partial update to a claim
pub async fn update_claim(
    _admin: AdminClaims,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateClaimRequest>, JsonRejection>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = parse_claim_id(&id)?;
    let Json(request) = payload?;

    let claim = state.claims.update(id, request.into_patch()?).await?;

    Ok(Json(ClaimResponse::from(claim)))
}

/// A malformed ID can never have been issued, so it reads as absent
fn parse_claim_id(raw: &str) -> Result<ClaimId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound("Claim not found".to_string()))
}
