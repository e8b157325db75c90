//! Login Verification
//!
//! `AuthSession` checks submitted credentials against the account store.
//! The empty-store case is reported separately so clients can route the
//! operator to first-run setup; every credential failure after that point
//! collapses into the same `InvalidCredentials` error, whether the email
//! was unknown or the password wrong.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::IdentityError;
use crate::password::verify_password;
use crate::ports::UserRepository;
use crate::user::SessionProfile;

/// Service verifying login credentials
#[derive(Clone)]
pub struct AuthSession {
    users: Arc<dyn UserRepository>,
}

impl AuthSession {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Verifies credentials and returns the account profile
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionProfile, IdentityError> {
        if self.users.count().await? == 0 {
            return Err(IdentityError::NoUsers);
        }

        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("Login attempt for unknown email");
                return Err(IdentityError::InvalidCredentials);
            }
        };

        if !verify_password(&user.password_hash, password) {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(IdentityError::InvalidCredentials);
        }

        info!(user_id = %user.id, "Login succeeded");
        Ok(user.profile())
    }
}
