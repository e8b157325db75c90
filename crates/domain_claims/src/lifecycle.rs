//! Claim Lifecycle Service
//!
//! Coordinates claim intake and review against the storage port. Status
//! changes are validated against the transition table here; adapters
//! persist whatever they are handed.

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::ClaimId;

use crate::claim::{Claim, ClaimPatch, NewClaim};
use crate::error::ClaimError;
use crate::ports::ClaimRepository;

/// Service managing claim intake and review
#[derive(Clone)]
pub struct ClaimLifecycle {
    claims: Arc<dyn ClaimRepository>,
}

impl ClaimLifecycle {
    pub fn new(claims: Arc<dyn ClaimRepository>) -> Self {
        Self { claims }
    }

    /// Accepts a new claim, always starting at `Pending`
    #[instrument(skip(self, new))]
    pub async fn submit(&self, new: NewClaim) -> Result<Claim, ClaimError> {
        let claim = Claim::submit(new);
        let stored = self.claims.insert(&claim).await?;
        info!(claim_id = %stored.id, "Claim submitted");
        Ok(stored)
    }

    /// Fetches a single claim
    pub async fn find(&self, id: ClaimId) -> Result<Claim, ClaimError> {
        self.claims
            .find_by_id(id)
            .await?
            .ok_or_else(|| ClaimError::ClaimNotFound(id.to_string()))
    }

    /// Lists all claims, newest first
    pub async fn list(&self) -> Result<Vec<Claim>, ClaimError> {
        Ok(self.claims.list().await?)
    }

    /// Merges a partial update after validating any status change
    ///
    /// Updates are last-write-wins; the patch lands on whatever is stored
    /// when the store executes it.
    #[instrument(skip(self, patch), fields(claim_id = %id))]
    pub async fn update(&self, id: ClaimId, patch: ClaimPatch) -> Result<Claim, ClaimError> {
        let current = self.find(id).await?;

        if let Some(target) = patch.status {
            if !current.status.can_transition_to(target) {
                return Err(ClaimError::InvalidStatusTransition {
                    from: format!("{:?}", current.status),
                    to: format!("{:?}", target),
                });
            }
        }

        let updated = match self.claims.update(id, patch).await {
            Ok(claim) => claim,
            Err(e) if e.is_not_found() => return Err(ClaimError::ClaimNotFound(id.to_string())),
            Err(e) => return Err(ClaimError::Store(e)),
        };

        info!(status = ?updated.status, "Claim updated");
        Ok(updated)
    }
}
