//! In-memory storage adapters
//!
//! Hash-map implementations of the domain ports, honoring the same
//! atomicity contracts as the PostgreSQL repositories. They back tests and
//! local runs configured with `storage = memory`; nothing survives a
//! restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use core_kernel::{
    AdapterHealth, ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError, UserId,
};
use domain_claims::claim::{Claim, ClaimPatch};
use domain_claims::ports::ClaimRepository;
use domain_identity::ports::UserRepository;
use domain_identity::user::{NewUser, User};

fn healthy(adapter_id: &str) -> HealthCheckResult {
    HealthCheckResult {
        adapter_id: adapter_id.to_string(),
        status: AdapterHealth::Healthy,
        latency_ms: 0,
        message: None,
        checked_at: Utc::now(),
    }
}

/// In-memory implementation of the `UserRepository` port
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for MemoryUserRepository {}

#[async_trait]
impl HealthCheckable for MemoryUserRepository {
    async fn health_check(&self) -> HealthCheckResult {
        healthy("memory-user-repository")
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn count(&self) -> Result<i64, PortError> {
        Ok(self.users.read().await.len() as i64)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn insert_first_admin(&self, user: NewUser) -> Result<User, PortError> {
        // Write guard held across the emptiness check and the insert
        let mut users = self.users.write().await;
        if !users.is_empty() {
            return Err(PortError::conflict("admin user already exists"));
        }

        let stored = User {
            id: UserId::new_v7(),
            email: user.email,
            password_hash: user.password_hash,
            is_admin: user.is_admin,
            created_at: Utc::now(),
        };
        users.insert(stored.id, stored.clone());
        Ok(stored)
    }
}

/// In-memory implementation of the `ClaimRepository` port
#[derive(Debug, Clone, Default)]
pub struct MemoryClaimRepository {
    claims: Arc<RwLock<HashMap<ClaimId, Claim>>>,
}

impl MemoryClaimRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for MemoryClaimRepository {}

#[async_trait]
impl HealthCheckable for MemoryClaimRepository {
    async fn health_check(&self) -> HealthCheckResult {
        healthy("memory-claim-repository")
    }
}

#[async_trait]
impl ClaimRepository for MemoryClaimRepository {
    async fn insert(&self, claim: &Claim) -> Result<Claim, PortError> {
        let mut claims = self.claims.write().await;
        claims.insert(claim.id, claim.clone());
        Ok(claim.clone())
    }

    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        let claims = self.claims.read().await;
        Ok(claims.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Claim>, PortError> {
        let claims = self.claims.read().await;
        let mut all: Vec<Claim> = claims.values().cloned().collect();
        // Id as tiebreak keeps the order stable when timestamps collide
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.as_uuid().cmp(a.id.as_uuid()))
        });
        Ok(all)
    }

    async fn update(&self, id: ClaimId, patch: ClaimPatch) -> Result<Claim, PortError> {
        let mut claims = self.claims.write().await;
        let claim = claims
            .get_mut(&id)
            .ok_or_else(|| PortError::not_found("Claim", id))?;
        claim.apply(patch);
        Ok(claim.clone())
    }
}
