//! Comprehensive tests for domain_claims

use chrono::Duration;

use domain_claims::claim::{Claim, ClaimPatch, ClaimStatus, NewClaim};
use domain_claims::error::ClaimError;

fn create_test_claim() -> Claim {
    Claim::submit(NewClaim {
        order_number: "ORD-1042".to_string(),
        email: "jane.doe@example.com".to_string(),
        name: "Jane Doe".to_string(),
        address: "12 Harbor Lane, Portsmouth".to_string(),
        phone_number: "+44 7700 900123".to_string(),
        brand: "Aquapure".to_string(),
        problem_description: "Filter unit leaks from the base seal".to_string(),
    })
}

// ============================================================================
// Status Transition Tests
// ============================================================================

mod status_tests {
    use super::*;

    #[test]
    fn test_pending_to_in_review() {
        assert!(ClaimStatus::Pending.can_transition_to(ClaimStatus::InReview));
    }

    #[test]
    fn test_pending_to_approved() {
        assert!(ClaimStatus::Pending.can_transition_to(ClaimStatus::Approved));
    }

    #[test]
    fn test_pending_to_rejected() {
        assert!(ClaimStatus::Pending.can_transition_to(ClaimStatus::Rejected));
    }

    #[test]
    fn test_pending_cannot_skip_to_resolved() {
        assert!(!ClaimStatus::Pending.can_transition_to(ClaimStatus::Resolved));
    }

    #[test]
    fn test_in_review_back_to_pending() {
        assert!(ClaimStatus::InReview.can_transition_to(ClaimStatus::Pending));
    }

    #[test]
    fn test_in_review_cannot_skip_to_resolved() {
        assert!(!ClaimStatus::InReview.can_transition_to(ClaimStatus::Resolved));
    }

    #[test]
    fn test_approved_to_resolved() {
        assert!(ClaimStatus::Approved.can_transition_to(ClaimStatus::Resolved));
    }

    #[test]
    fn test_approved_reopens_to_in_review() {
        assert!(ClaimStatus::Approved.can_transition_to(ClaimStatus::InReview));
    }

    #[test]
    fn test_approved_cannot_return_to_pending() {
        assert!(!ClaimStatus::Approved.can_transition_to(ClaimStatus::Pending));
    }

    #[test]
    fn test_rejected_to_resolved() {
        assert!(ClaimStatus::Rejected.can_transition_to(ClaimStatus::Resolved));
    }

    #[test]
    fn test_rejected_reopens_to_in_review() {
        assert!(ClaimStatus::Rejected.can_transition_to(ClaimStatus::InReview));
    }

    #[test]
    fn test_approved_cannot_flip_to_rejected() {
        assert!(!ClaimStatus::Approved.can_transition_to(ClaimStatus::Rejected));
        assert!(!ClaimStatus::Rejected.can_transition_to(ClaimStatus::Approved));
    }

    #[test]
    fn test_resolved_is_terminal() {
        let targets = [
            ClaimStatus::Pending,
            ClaimStatus::InReview,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
        ];
        for target in targets {
            assert!(!ClaimStatus::Resolved.can_transition_to(target));
        }
        assert!(ClaimStatus::Resolved.is_terminal());
        assert!(!ClaimStatus::Pending.is_terminal());
    }

    #[test]
    fn test_repeating_current_status_allowed() {
        assert!(ClaimStatus::Pending.can_transition_to(ClaimStatus::Pending));
        assert!(ClaimStatus::Resolved.can_transition_to(ClaimStatus::Resolved));
    }

    #[test]
    fn test_parse_status() {
        assert_eq!("Pending".parse::<ClaimStatus>().unwrap(), ClaimStatus::Pending);
        assert_eq!("InReview".parse::<ClaimStatus>().unwrap(), ClaimStatus::InReview);
        assert_eq!("Approved".parse::<ClaimStatus>().unwrap(), ClaimStatus::Approved);
        assert_eq!("Rejected".parse::<ClaimStatus>().unwrap(), ClaimStatus::Rejected);
        assert_eq!("Resolved".parse::<ClaimStatus>().unwrap(), ClaimStatus::Resolved);
    }

    #[test]
    fn test_parse_status_rejects_unknown() {
        let result = "Shipped".parse::<ClaimStatus>();
        match result {
            Err(ClaimError::InvalidStatus(s)) => assert_eq!(s, "Shipped"),
            other => panic!("expected InvalidStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_is_case_sensitive() {
        assert!("pending".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_transition_error_message() {
        let err = ClaimError::InvalidStatusTransition {
            from: format!("{:?}", ClaimStatus::Pending),
            to: format!("{:?}", ClaimStatus::Resolved),
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition from Pending to Resolved"
        );
    }
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[test]
    fn test_submit_starts_pending() {
        let claim = create_test_claim();

        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.order_number, "ORD-1042");
        assert_eq!(claim.email, "jane.doe@example.com");
        assert_eq!(claim.created_at, claim.updated_at);
    }

    #[test]
    fn test_apply_merges_set_fields_only() {
        let mut claim = create_test_claim();

        claim.apply(ClaimPatch {
            name: Some("Jane Smith".to_string()),
            brand: Some("Aquapure Pro".to_string()),
            ..ClaimPatch::default()
        });

        assert_eq!(claim.name, "Jane Smith");
        assert_eq!(claim.brand, "Aquapure Pro");
        assert_eq!(claim.order_number, "ORD-1042");
        assert_eq!(claim.email, "jane.doe@example.com");
        assert_eq!(claim.status, ClaimStatus::Pending);
    }

    #[test]
    fn test_apply_updates_status() {
        let mut claim = create_test_claim();

        claim.apply(ClaimPatch {
            status: Some(ClaimStatus::InReview),
            ..ClaimPatch::default()
        });

        assert_eq!(claim.status, ClaimStatus::InReview);
        assert_eq!(claim.problem_description, "Filter unit leaks from the base seal");
    }

    #[test]
    fn test_apply_empty_patch_touches_updated_at() {
        let mut claim = create_test_claim();
        claim.updated_at = claim.created_at - Duration::minutes(5);

        claim.apply(ClaimPatch::default());

        assert!(claim.updated_at >= claim.created_at);
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.order_number, "ORD-1042");
    }

    #[test]
    fn test_submitted_claims_get_distinct_ids() {
        let first = create_test_claim();
        let second = create_test_claim();
        assert_ne!(first.id, second.id);
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization_tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_variant_name() {
        let json = serde_json::to_value(ClaimStatus::InReview).unwrap();
        assert_eq!(json, serde_json::json!("InReview"));
    }

    #[test]
    fn test_status_deserializes_from_variant_name() {
        let status: ClaimStatus = serde_json::from_str("\"Rejected\"").unwrap();
        assert_eq!(status, ClaimStatus::Rejected);
    }

    #[test]
    fn test_claim_serialization_round_trip() {
        let claim = create_test_claim();

        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, claim.id);
        assert_eq!(back.status, claim.status);
        assert_eq!(back.problem_description, claim.problem_description);
    }
}
