//! Identity domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the identity domain
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No accounts exist yet; the caller should run first-admin setup
    #[error("No users exist")]
    NoUsers,

    /// Email/password pair did not match a stored account
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The one-time bootstrap has already happened
    #[error("Admin user already exists")]
    AdminExists,

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] PortError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(IdentityError::NoUsers.to_string(), "No users exist");
        assert_eq!(
            IdentityError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            IdentityError::AdminExists.to_string(),
            "Admin user already exists"
        );
    }
}
