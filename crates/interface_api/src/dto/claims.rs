//! Claims DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_claims::{Claim, ClaimError, ClaimPatch, ClaimStatus, NewClaim};

/// Claim submission payload
///
/// Carries exactly the customer-supplied fields. Unknown keys are ignored,
/// so a submitted `status` has nowhere to land: every claim enters as
/// `Pending`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitClaimRequest {
    pub order_number: String,
    pub email: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub brand: String,
    pub problem_description: String,
}

impl SubmitClaimRequest {
    pub fn into_new_claim(self) -> NewClaim {
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

/// Partial update payload; absent fields keep their stored values
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateClaimRequest {
    pub order_number: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub brand: Option<String>,
    pub problem_description: Option<String>,
    pub status: Option<String>,
}

impl UpdateClaimRequest {
    /// Converts to a domain patch, parsing the status name if one was sent
    pub fn into_patch(self) -> Result<ClaimPatch, ClaimError> {
        let status = match self.status {
            Some(raw) => Some(raw.parse::<ClaimStatus>()?),
            None => None,
        };

        Ok(ClaimPatch {
            order_number: self.order_number,
            email: self.email,
            name: self.name,
            address: self.address,
            phone_number: self.phone_number,
            brand: self.brand,
            problem_description: self.problem_description,
            status,
        })
    }
}

/// Claim as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: Uuid,
    pub order_number: String,
    pub email: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub brand: String,
    pub problem_description: String,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: Uuid::from(claim.id),
            order_number: claim.order_number,
            email: claim.email,
            name: claim.name,
            address: claim.address,
            phone_number: claim.phone_number,
            brand: claim.brand,
            problem_description: claim.problem_description,
            status: claim.status,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}
