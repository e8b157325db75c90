//! Claims Domain Ports
//!
//! The `ClaimRepository` trait defines everything the claims domain needs
//! from its store. The PostgreSQL and in-memory adapters in the
//! infrastructure layer both implement it, so the lifecycle service stays
//! storage-agnostic.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PortError};

use crate::claim::{Claim, ClaimPatch};

/// Port for claim storage
#[async_trait]
pub trait ClaimRepository: DomainPort + HealthCheckable {
    /// Persists a newly submitted claim
    async fn insert(&self, claim: &Claim) -> Result<Claim, PortError>;

    /// Looks up a claim by id
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Lists all claims, newest first
    async fn list(&self) -> Result<Vec<Claim>, PortError>;

    /// Merges a patch into the stored claim and returns the result
    ///
    /// Unset patch fields keep their stored values. Returns
    /// `PortError::NotFound` when no claim has the given id.
    async fn update(&self, id: ClaimId, patch: ClaimPatch) -> Result<Claim, PortError>;
}
