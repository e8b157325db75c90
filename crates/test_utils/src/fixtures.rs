//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the claim service.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ClaimId, UserId};
use domain_claims::NewClaim;
use domain_identity::password::hash_password;
use domain_identity::{NewUser, User};
use uuid::Uuid;

/// Fixture for account test data
pub struct UserFixtures;

impl UserFixtures {
    /// Standard administrator email
    pub fn admin_email() -> &'static str {
        "admin@example.com"
    }

    /// Standard administrator password
    pub fn admin_password() -> &'static str {
        "correct horse battery staple"
    }

    /// New-account data for the first administrator with a real argon2 hash
    pub fn admin() -> NewUser {
        NewUser {
            email: Self::admin_email().to_string(),
            password_hash: hash_password(Self::admin_password())
                .expect("fixture password should hash"),
            is_admin: true,
        }
    }

    /// A stored administrator account with a deterministic identifier
    pub fn admin_user() -> User {
        User {
            id: IdFixtures::user_id(),
            email: Self::admin_email().to_string(),
            password_hash: hash_password(Self::admin_password())
                .expect("fixture password should hash"),
            is_admin: true,
            created_at: TemporalFixtures::morning_submission(),
        }
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Claim data as a customer would submit it
    pub fn leaking_filter() -> NewClaim {
        NewClaim {
            order_number: StringFixtures::order_number().to_string(),
            email: StringFixtures::email().to_string(),
            name: StringFixtures::customer_name().to_string(),
            address: StringFixtures::address().to_string(),
            phone_number: StringFixtures::phone().to_string(),
            brand: StringFixtures::brand().to_string(),
            problem_description: StringFixtures::problem_description().to_string(),
        }
    }

    /// A second submission from a different customer
    pub fn cracked_housing() -> NewClaim {
        NewClaim {
            order_number: "ORD-2024-000002".to_string(),
            email: "sam.taylor@example.com".to_string(),
            name: "Sam Taylor".to_string(),
            address: "7 Mill Road, Leeds".to_string(),
            phone_number: "+44 7700 900456".to_string(),
            brand: "Hydroflow".to_string(),
            problem_description: "Pump housing cracked after two weeks of use".to_string(),
        }
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Morning submission timestamp (Mar 1, 2024)
    pub fn morning_submission() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    /// Afternoon submission on the same day
    pub fn afternoon_submission() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 15, 45, 0).unwrap()
    }

    /// Submission on the following day
    pub fn next_day_submission() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 2, 8, 10, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic claim ID for testing
    pub fn claim_id() -> ClaimId {
        ClaimId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic user ID for testing
    pub fn user_id() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard order number
    pub fn order_number() -> &'static str {
        "ORD-2024-000001"
    }

    /// Test email address
    pub fn email() -> &'static str {
        "jane.doe@example.com"
    }

    /// Test customer name
    pub fn customer_name() -> &'static str {
        "Jane Doe"
    }

    /// Test postal address
    pub fn address() -> &'static str {
        "12 Harbor Lane, Portsmouth"
    }

    /// Test phone number
    pub fn phone() -> &'static str {
        "+44 7700 900123"
    }

    /// Test product brand
    pub fn brand() -> &'static str {
        "Aquapure"
    }

    /// Test problem description
    pub fn problem_description() -> &'static str {
        "Filter unit leaks from the base seal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_identity::password::verify_password;

    #[test]
    fn test_id_fixtures_are_deterministic() {
        let id1 = IdFixtures::claim_id();
        let id2 = IdFixtures::claim_id();
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_temporal_fixtures_ordering() {
        let morning = TemporalFixtures::morning_submission();
        let afternoon = TemporalFixtures::afternoon_submission();
        let next_day = TemporalFixtures::next_day_submission();

        assert!(morning < afternoon);
        assert!(afternoon < next_day);
    }

    #[test]
    fn test_admin_fixture_password_verifies() {
        let admin = UserFixtures::admin();
        assert!(verify_password(
            &admin.password_hash,
            UserFixtures::admin_password()
        ));
    }

    #[test]
    fn test_claim_fixtures_are_distinct_customers() {
        let first = ClaimFixtures::leaking_filter();
        let second = ClaimFixtures::cracked_housing();

        assert_ne!(first.order_number, second.order_number);
        assert_ne!(first.email, second.email);
    }
}
