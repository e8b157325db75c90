//! First-Run Bootstrap
//!
//! A fresh deployment has no accounts. The `BootstrapGate` reports whether
//! the store has been initialized and creates the one and only administrator
//! account. Creation is write-once: the repository enforces atomicity, so a
//! second attempt (or a concurrent racer that lost) surfaces as
//! `IdentityError::AdminExists` no matter how the requests interleave.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::IdentityError;
use crate::password::hash_password;
use crate::ports::UserRepository;
use crate::user::{NewUser, SessionProfile};

/// Service guarding the one-time administrator setup
#[derive(Clone)]
pub struct BootstrapGate {
    users: Arc<dyn UserRepository>,
}

impl BootstrapGate {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Returns true once any account exists
    pub async fn is_initialized(&self) -> Result<bool, IdentityError> {
        let count = self.users.count().await?;
        Ok(count > 0)
    }

    /// Creates the first administrator account
    ///
    /// Fails with `AdminExists` when the store already holds any account,
    /// including when a concurrent call won the race first.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn create_first_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionProfile, IdentityError> {
        let password_hash = hash_password(password)?;

        let new_user = NewUser {
            email: email.to_string(),
            password_hash,
            is_admin: true,
        };

        let user = match self.users.insert_first_admin(new_user).await {
            Ok(user) => user,
            Err(e) if e.is_conflict() => return Err(IdentityError::AdminExists),
            Err(e) => return Err(IdentityError::Store(e)),
        };

        info!(user_id = %user.id, "First administrator created");
        Ok(user.profile())
    }
}
