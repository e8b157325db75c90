//! Session tokens and admin gating
//!
//! Login issues a signed JWT carrying the account email and admin flag.
//! Handlers that serve the review queue take the [`AdminClaims`] extractor,
//! which rejects requests lacking a valid administrator token before the
//! handler body runs.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ApiError;
use crate::AppState;

/// JWT claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (account email)
    pub sub: String,
    /// Whether the account holds administrator privileges
    pub admin: bool,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing session token")]
    MissingToken,
    #[error("Invalid session token")]
    InvalidToken,
    #[error("Session expired")]
    TokenExpired,
}

/// Creates a new session token
///
/// # Arguments
///
/// * `email` - Account email, used as the token subject
/// * `is_admin` - Whether the account holds administrator privileges
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    email: &str,
    is_admin: bool,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = SessionClaims {
        sub: email.to_string(),
        admin: is_admin,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a session token
///
/// # Arguments
///
/// * `token` - The JWT token to validate
/// * `secret` - JWT secret key
pub fn validate_token(token: &str, secret: &str) -> Result<SessionClaims, AuthError> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

/// Pulls the bearer token out of the Authorization header
pub fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)
}

/// Extractor admitting only authenticated administrators
#[derive(Debug, Clone)]
pub struct AdminClaims(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AdminClaims {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = validate_token(token, &state.config.jwt_secret)?;

        if !claims.admin {
            return Err(ApiError::Forbidden(
                "Administrator access required".to_string(),
            ));
        }

        Ok(AdminClaims(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let token = create_token("admin@example.com", true, SECRET, 3600).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "admin@example.com");
        assert!(claims.admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = create_token("admin@example.com", true, SECRET, 3600).unwrap();
        let result = validate_token(&token, "different-secret");

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = create_token("admin@example.com", true, SECRET, 3600).unwrap();
        let tampered = format!("{}xx", token);

        assert!(matches!(
            validate_token(&tampered, SECRET),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_admin_flag_survives_the_round_trip() {
        let token = create_token("viewer@example.com", false, SECRET, 3600).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert!(!claims.admin);
    }
}
