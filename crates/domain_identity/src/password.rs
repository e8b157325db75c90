//! Password hashing and verification
//!
//! Wraps argon2id with a randomly generated salt per hash. Hashes are
//! stored and exchanged in PHC string format, so parameters travel with
//! the hash and can be tightened later without invalidating old accounts.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

use crate::error::IdentityError;

/// Hashes a plaintext password into a PHC-format argon2id string
pub fn hash_password(password: &str) -> Result<String, IdentityError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes).map_err(|e| IdentityError::Hashing(e.to_string()))?;
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| IdentityError::Hashing(e.to_string()))?;
    let argon2 = Argon2::default();
    let phc = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| IdentityError::Hashing(e.to_string()))?
        .to_string();
    Ok(phc)
}

/// Verifies a plaintext password against a stored PHC hash
///
/// An unparseable hash behaves like a wrong password rather than an error,
/// so a corrupt row cannot be distinguished from a failed attempt.
pub fn verify_password(hash: &str, password: &str) -> bool {
    if let Ok(parsed) = PasswordHash::new(hash) {
        let argon2 = Argon2::default();
        argon2.verify_password(password.as_bytes(), &parsed).is_ok()
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_produces_phc_string() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_round_trip() {
        let hash = hash_password("s3cret!").unwrap();
        assert!(verify_password(&hash, "s3cret!"));
        assert!(!verify_password(&hash, "s3cret"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("not-a-phc-string", "anything"));
        assert!(!verify_password("", "anything"));
    }
}
