//! Identity DTOs

use std::fmt;

use serde::{Deserialize, Serialize};

use domain_identity::SessionProfile;

/// Email/password pair for login and first-admin setup
#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Answer to the first-run check
#[derive(Debug, Serialize)]
pub struct CheckUsersResponse {
    pub exists: bool,
}

/// Successful login: the profile plus a session token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub email: String,
    pub is_admin: bool,
    pub token: String,
}

/// Account profile without a session token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub email: String,
    pub is_admin: bool,
}

impl From<SessionProfile> for ProfileResponse {
    fn from(profile: SessionProfile) -> Self {
        Self {
            email: profile.email,
            is_admin: profile.is_admin,
        }
    }
}
