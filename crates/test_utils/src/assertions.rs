//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_claims::{Claim, ClaimStatus, NewClaim};

/// Asserts that a stored claim carries the fields of a submission
///
/// # Arguments
///
/// * `actual` - The claim as returned by a store or service
/// * `expected` - The submission the claim was created from
///
/// # Panics
///
/// Panics if any customer-supplied field differs
pub fn assert_claim_matches_submission(actual: &Claim, expected: &NewClaim) {
    assert_eq!(
        actual.order_number, expected.order_number,
        "Order number mismatch"
    );
    assert_eq!(actual.email, expected.email, "Email mismatch");
    assert_eq!(actual.name, expected.name, "Name mismatch");
    assert_eq!(actual.address, expected.address, "Address mismatch");
    assert_eq!(
        actual.phone_number, expected.phone_number,
        "Phone number mismatch"
    );
    assert_eq!(actual.brand, expected.brand, "Brand mismatch");
    assert_eq!(
        actual.problem_description, expected.problem_description,
        "Problem description mismatch"
    );
}

/// Asserts that a claim is in the expected status
pub fn assert_claim_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status, expected,
        "Claim {} is {:?}, expected {:?}",
        claim.id, claim.status, expected
    );
}

/// Asserts that claims are ordered newest first by creation time
pub fn assert_newest_first(claims: &[Claim]) {
    for pair in claims.windows(2) {
        assert!(
            pair[0].created_at >= pair[1].created_at,
            "Claims out of order: {} created {} listed before {} created {}",
            pair[0].id,
            pair[0].created_at,
            pair[1].id,
            pair[1].created_at
        );
    }
}

/// Asserts that a claim was never updated before it was created
pub fn assert_timestamps_consistent(claim: &Claim) {
    assert!(
        claim.updated_at >= claim.created_at,
        "Claim {} updated at {} before created at {}",
        claim.id,
        claim.updated_at,
        claim.created_at
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TestClaimBuilder;
    use crate::fixtures::TemporalFixtures;

    #[test]
    fn test_assert_claim_matches_submission_passes() {
        let submission = TestClaimBuilder::new().build_new();
        let claim = Claim::submit(submission.clone());

        assert_claim_matches_submission(&claim, &submission);
    }

    #[test]
    #[should_panic(expected = "Order number mismatch")]
    fn test_assert_claim_matches_submission_detects_drift() {
        let submission = TestClaimBuilder::new().build_new();
        let claim = TestClaimBuilder::new()
            .with_order_number("ORD-2024-000099")
            .build();

        assert_claim_matches_submission(&claim, &submission);
    }

    #[test]
    fn test_assert_newest_first_accepts_ordered() {
        let newer = TestClaimBuilder::new()
            .submitted_at(TemporalFixtures::afternoon_submission())
            .build();
        let older = TestClaimBuilder::new()
            .submitted_at(TemporalFixtures::morning_submission())
            .build();

        assert_newest_first(&[newer, older]);
    }

    #[test]
    #[should_panic(expected = "Claims out of order")]
    fn test_assert_newest_first_rejects_unordered() {
        let newer = TestClaimBuilder::new()
            .submitted_at(TemporalFixtures::afternoon_submission())
            .build();
        let older = TestClaimBuilder::new()
            .submitted_at(TemporalFixtures::morning_submission())
            .build();

        assert_newest_first(&[older, newer]);
    }

    #[test]
    #[should_panic(expected = "expected InReview")]
    fn test_assert_claim_status_reports_both_sides() {
        let claim = TestClaimBuilder::new().build();
        assert_claim_status(&claim, ClaimStatus::InReview);
    }
}
