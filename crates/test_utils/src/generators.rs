//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::ClaimId;
use domain_claims::{ClaimPatch, ClaimStatus, NewClaim};
use proptest::prelude::*;

/// Strategy for generating valid ClaimStatus values
pub fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::InReview),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
        Just(ClaimStatus::Resolved),
    ]
}

/// Strategy for generating non-terminal ClaimStatus values
pub fn open_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::InReview),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy for generating ClaimId
pub fn claim_id_strategy() -> impl Strategy<Value = ClaimId> {
    any::<[u8; 16]>().prop_map(|bytes| ClaimId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating order numbers
pub fn order_number_strategy() -> impl Strategy<Value = String> {
    (1u32..999_999u32).prop_map(|n| format!("ORD-2024-{:06}", n))
}

/// Strategy for generating valid email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{5,10}", "[a-z]{3,8}").prop_map(|(local, domain)| format!("{}@{}.com", local, domain))
}

/// Strategy for generating valid phone numbers
pub fn phone_strategy() -> impl Strategy<Value = String> {
    (100u32..999u32, 100u32..999u32, 1000u32..9999u32)
        .prop_map(|(area, prefix, line)| format!("+1-{}-{}-{}", area, prefix, line))
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}

/// Strategy for generating street addresses
pub fn address_strategy() -> impl Strategy<Value = String> {
    (1u32..200u32, "[A-Z][a-z]{3,8}").prop_map(|(number, street)| {
        format!("{} {} Street", number, street)
    })
}

/// Strategy for generating product brands
pub fn brand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Aquapure".to_string()),
        Just("Hydroflow".to_string()),
        Just("Clearstream".to_string()),
        Just("Purella".to_string()),
    ]
}

/// Strategy for generating problem descriptions
pub fn problem_description_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{10,80}".prop_map(|s| s)
}

/// Strategy for generating complete claim submissions
pub fn new_claim_strategy() -> impl Strategy<Value = NewClaim> {
    (
        order_number_strategy(),
        email_strategy(),
        name_strategy(),
        address_strategy(),
        phone_strategy(),
        brand_strategy(),
        problem_description_strategy(),
    )
        .prop_map(
            |(order_number, email, name, address, phone_number, brand, problem_description)| {
                NewClaim {
                    order_number,
                    email,
                    name,
                    address,
                    phone_number,
                    brand,
                    problem_description,
                }
            },
        )
}

/// Strategy for generating claim patches with a random subset of fields set
pub fn claim_patch_strategy() -> impl Strategy<Value = ClaimPatch> {
    (
        proptest::option::of(order_number_strategy()),
        proptest::option::of(email_strategy()),
        proptest::option::of(name_strategy()),
        proptest::option::of(address_strategy()),
        proptest::option::of(phone_strategy()),
        proptest::option::of(brand_strategy()),
        proptest::option::of(problem_description_strategy()),
        proptest::option::of(status_strategy()),
    )
        .prop_map(
            |(order_number, email, name, address, phone_number, brand, problem_description, status)| {
                ClaimPatch {
                    order_number,
                    email,
                    name,
                    address,
                    phone_number,
                    brand,
                    problem_description,
                    status,
                }
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TestClaimBuilder;

    proptest! {
        #[test]
        fn generated_claims_have_valid_contact(claim in new_claim_strategy()) {
            prop_assert!(claim.email.contains('@'));
            prop_assert!(!claim.order_number.is_empty());
            prop_assert!(!claim.problem_description.is_empty());
        }

        #[test]
        fn open_statuses_are_not_terminal(status in open_status_strategy()) {
            prop_assert!(!status.is_terminal());
        }

        #[test]
        fn patch_preserves_unset_fields(patch in claim_patch_strategy()) {
            let original = TestClaimBuilder::new().build();
            let mut patched = original.clone();
            patched.apply(patch.clone());

            match patch.email {
                Some(email) => prop_assert_eq!(patched.email, email),
                None => prop_assert_eq!(patched.email, original.email),
            }
            match patch.status {
                Some(status) => prop_assert_eq!(patched.status, status),
                None => prop_assert_eq!(patched.status, original.status),
            }
        }
    }
}
