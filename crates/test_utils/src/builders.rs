//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStatus, NewClaim};

use crate::fixtures::{StringFixtures, TemporalFixtures};

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: ClaimId,
    order_number: String,
    email: String,
    name: String,
    address: String,
    phone_number: String,
    brand: String,
    problem_description: String,
    status: ClaimStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::new_v7(),
            order_number: StringFixtures::order_number().to_string(),
            email: StringFixtures::email().to_string(),
            name: StringFixtures::customer_name().to_string(),
            address: StringFixtures::address().to_string(),
            phone_number: StringFixtures::phone().to_string(),
            brand: StringFixtures::brand().to_string(),
            problem_description: StringFixtures::problem_description().to_string(),
            status: ClaimStatus::Pending,
            created_at: TemporalFixtures::morning_submission(),
            updated_at: TemporalFixtures::morning_submission(),
        }
    }

    /// Sets the claim ID
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    /// Sets the order number
    pub fn with_order_number(mut self, number: impl Into<String>) -> Self {
        self.order_number = number.into();
        self
    }

    /// Sets the customer email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the customer name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the customer address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the customer phone number
    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = phone.into();
        self
    }

    /// Sets the product brand
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the problem description
    pub fn with_problem_description(mut self, desc: impl Into<String>) -> Self {
        self.problem_description = desc.into();
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets both timestamps to the given instant
    pub fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self.updated_at = at;
        self
    }

    /// Sets the updated timestamp
    pub fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    /// Builds a stored claim
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            order_number: self.order_number,
            email: self.email,
            name: self.name,
            address: self.address,
            phone_number: self.phone_number,
            brand: self.brand,
            problem_description: self.problem_description,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Builds the submission data only
    pub fn build_new(self) -> NewClaim {
        NewClaim {
            order_number: self.order_number,
            email: self.email,
            name: self.name,
            address: self.address,
            phone_number: self.phone_number,
            brand: self.brand,
            problem_description: self.problem_description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_builder_defaults() {
        let claim = TestClaimBuilder::new().build();

        assert_eq!(claim.order_number, "ORD-2024-000001");
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.created_at, claim.updated_at);
    }

    #[test]
    fn test_claim_builder_customization() {
        let claim = TestClaimBuilder::new()
            .with_brand("Hydroflow")
            .with_status(ClaimStatus::InReview)
            .build();

        assert_eq!(claim.brand, "Hydroflow");
        assert_eq!(claim.status, ClaimStatus::InReview);
    }

    #[test]
    fn test_claim_builder_timestamps() {
        let submitted = TemporalFixtures::afternoon_submission();
        let claim = TestClaimBuilder::new().submitted_at(submitted).build();

        assert_eq!(claim.created_at, submitted);
        assert_eq!(claim.updated_at, submitted);
    }

    #[test]
    fn test_build_new_carries_fields() {
        let submission = TestClaimBuilder::new()
            .with_order_number("ORD-2024-000099")
            .build_new();

        assert_eq!(submission.order_number, "ORD-2024-000099");
        assert_eq!(submission.email, StringFixtures::email());
    }
}
