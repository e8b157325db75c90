//! User aggregate

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use core_kernel::UserId;

/// An account holder
///
/// Deliberately does not implement `Serialize`: the stored password hash
/// must never reach a wire format. Use [`User::profile`] to obtain the
/// client-safe projection.
#[derive(Clone)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Login email, unique across accounts
    pub email: String,
    /// Argon2 hash in PHC string format
    pub password_hash: String,
    /// Whether this account holds administrator privileges
    pub is_admin: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns the client-safe projection of this account
    pub fn profile(&self) -> SessionProfile {
        SessionProfile {
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Data for creating a new account
///
/// Carries an already-computed password hash; plaintext passwords stop at
/// the service layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Client-safe projection of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    pub email: String,
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User {
            id: UserId::new_v7(),
            email: "admin@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            is_admin: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_profile_projection() {
        let user = create_test_user();
        let profile = user.profile();

        assert_eq!(profile.email, "admin@example.com");
        assert!(profile.is_admin);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = create_test_user().profile();
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["email"], "admin@example.com");
        assert_eq!(json["isAdmin"], true);
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let user = create_test_user();
        let debug = format!("{:?}", user);

        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("$argon2id$"));
    }
}
