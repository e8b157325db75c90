//! Claim aggregate

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ClaimId;

use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Submitted, awaiting review
    Pending,
    /// Picked up by an administrator
    InReview,
    /// Accepted for handling
    Approved,
    /// Declined
    Rejected,
    /// Fully handled, no further changes
    Resolved,
}

impl ClaimStatus {
    /// Checks if a transition to the target status is valid
    ///
    /// Repeating the current status is always allowed; a patch that does not
    /// actually move the claim is a legal no-op.
    pub fn can_transition_to(self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        if self == target {
            return true;
        }
        matches!(
            (self, target),
            (Pending, InReview) |
            (Pending, Approved) |
            (Pending, Rejected) |
            (InReview, Pending) |
            (InReview, Approved) |
            (InReview, Rejected) |
            (Approved, InReview) |
            (Approved, Resolved) |
            (Rejected, InReview) |
            (Rejected, Resolved)
        )
    }

    /// Checks if no further transitions are possible
    pub fn is_terminal(self) -> bool {
        matches!(self, ClaimStatus::Resolved)
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ClaimStatus::Pending),
            "InReview" => Ok(ClaimStatus::InReview),
            "Approved" => Ok(ClaimStatus::Approved),
            "Rejected" => Ok(ClaimStatus::Rejected),
            "Resolved" => Ok(ClaimStatus::Resolved),
            other => Err(ClaimError::InvalidStatus(other.to_string())),
        }
    }
}

/// A product claim filed by a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Order the claim refers to
    pub order_number: String,
    /// Customer contact email
    pub email: String,
    /// Customer name
    pub name: String,
    /// Customer address
    pub address: String,
    /// Customer phone number
    pub phone_number: String,
    /// Product brand
    pub brand: String,
    /// What went wrong, in the customer's words
    pub problem_description: String,
    /// Status
    pub status: ClaimStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Claim data as submitted by a customer
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub order_number: String,
    pub email: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub brand: String,
    pub problem_description: String,
}

/// Partial update to a stored claim
///
/// Unset fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct ClaimPatch {
    pub order_number: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub brand: Option<String>,
    pub problem_description: Option<String>,
    pub status: Option<ClaimStatus>,
}

impl Claim {
    /// Creates a newly submitted claim
    ///
    /// Every claim enters the system as `Pending`; submitters cannot choose
    /// a status.
    pub fn submit(new: NewClaim) -> Self {
        let now = Utc::now();

        Self {
            id: ClaimId::new_v7(),
            order_number: new.order_number,
            email: new.email,
            name: new.name,
            address: new.address,
            phone_number: new.phone_number,
            brand: new.brand,
            problem_description: new.problem_description,
            status: ClaimStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a patch into the claim and touches `updated_at`
    ///
    /// The merge is unconditional; status transitions are validated by the
    /// lifecycle service before a patch reaches a store.
    pub fn apply(&mut self, patch: ClaimPatch) {
        if let Some(order_number) = patch.order_number {
            self.order_number = order_number;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(problem_description) = patch.problem_description {
            self.problem_description = problem_description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
        prop_oneof![
            Just(ClaimStatus::Pending),
            Just(ClaimStatus::InReview),
            Just(ClaimStatus::Approved),
            Just(ClaimStatus::Rejected),
            Just(ClaimStatus::Resolved),
        ]
    }

    proptest! {
        #[test]
        fn status_self_transition_always_allowed(status in status_strategy()) {
            prop_assert!(status.can_transition_to(status));
        }

        #[test]
        fn resolved_never_moves(target in status_strategy()) {
            if target != ClaimStatus::Resolved {
                prop_assert!(!ClaimStatus::Resolved.can_transition_to(target));
            }
        }

        #[test]
        fn status_round_trips_through_parse(status in status_strategy()) {
            let text = format!("{:?}", status);
            prop_assert_eq!(text.parse::<ClaimStatus>().unwrap(), status);
        }
    }
}
