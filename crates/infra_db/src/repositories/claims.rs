//! Claim repository implementation
//!
//! This module provides database access for claims, from customer
//! submission through review and resolution. Partial updates use COALESCE
//! so unset patch fields keep their stored values inside a single UPDATE.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{ClaimId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_claims::claim::{Claim, ClaimPatch, ClaimStatus};
use domain_claims::ports::ClaimRepository;

use crate::error::DatabaseError;
use crate::repositories::{check_pool, db_to_port_error};

/// PostgreSQL-backed implementation of the `ClaimRepository` port
#[derive(Debug, Clone)]
pub struct PostgresClaimRepository {
    pool: PgPool,
}

impl PostgresClaimRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PostgresClaimRepository {}

#[async_trait]
impl HealthCheckable for PostgresClaimRepository {
    async fn health_check(&self) -> HealthCheckResult {
        check_pool(&self.pool, "postgres-claim-repository").await
    }
}

#[async_trait]
impl ClaimRepository for PostgresClaimRepository {
    #[instrument(skip(self, claim), fields(claim_id = %claim.id))]
    async fn insert(&self, claim: &Claim) -> Result<Claim, PortError> {
        debug!("Inserting claim");

        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            INSERT INTO claims (
                claim_id, order_number, email, name, address, phone_number,
                brand, problem_description, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING
                claim_id, order_number, email, name, address, phone_number,
                brand, problem_description, status, created_at, updated_at
            "#,
        )
        .bind(Uuid::from(claim.id))
        .bind(&claim.order_number)
        .bind(&claim.email)
        .bind(&claim.name)
        .bind(&claim.address)
        .bind(&claim.phone_number)
        .bind(&claim.brand)
        .bind(&claim.problem_description)
        .bind(DbClaimStatus::from(claim.status))
        .bind(claim.created_at)
        .bind(claim.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_to_port_error(DatabaseError::from(&e)))?;

        Ok(row.into())
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        debug!("Fetching claim by ID");

        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT
                claim_id, order_number, email, name, address, phone_number,
                brand, problem_description, status, created_at, updated_at
            FROM claims
            WHERE claim_id = $1
            "#,
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_to_port_error(DatabaseError::from(&e)))?;

        Ok(row.map(Claim::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Claim>, PortError> {
        debug!("Listing claims");

        let rows = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT
                claim_id, order_number, email, name, address, phone_number,
                brand, problem_description, status, created_at, updated_at
            FROM claims
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_to_port_error(DatabaseError::from(&e)))?;

        Ok(rows.into_iter().map(Claim::from).collect())
    }

    #[instrument(skip(self, patch), fields(claim_id = %id))]
    async fn update(&self, id: ClaimId, patch: ClaimPatch) -> Result<Claim, PortError> {
        debug!("Updating claim");

        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            UPDATE claims SET
                order_number = COALESCE($2, order_number),
                email = COALESCE($3, email),
                name = COALESCE($4, name),
                address = COALESCE($5, address),
                phone_number = COALESCE($6, phone_number),
                brand = COALESCE($7, brand),
                problem_description = COALESCE($8, problem_description),
                status = COALESCE($9, status),
                updated_at = now()
            WHERE claim_id = $1
            RETURNING
                claim_id, order_number, email, name, address, phone_number,
                brand, problem_description, status, created_at, updated_at
            "#,
        )
        .bind(Uuid::from(id))
        .bind(patch.order_number)
        .bind(patch.email)
        .bind(patch.name)
        .bind(patch.address)
        .bind(patch.phone_number)
        .bind(patch.brand)
        .bind(patch.problem_description)
        .bind(patch.status.map(DbClaimStatus::from))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_to_port_error(DatabaseError::from(&e)))?;

        row.map(Claim::from)
            .ok_or_else(|| PortError::not_found("Claim", id))
    }
}

/// Claim status enumeration as stored in PostgreSQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "claim_status", rename_all = "snake_case")]
enum DbClaimStatus {
    Pending,
    InReview,
    Approved,
    Rejected,
    Resolved,
}

impl From<ClaimStatus> for DbClaimStatus {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Pending => DbClaimStatus::Pending,
            ClaimStatus::InReview => DbClaimStatus::InReview,
            ClaimStatus::Approved => DbClaimStatus::Approved,
            ClaimStatus::Rejected => DbClaimStatus::Rejected,
            ClaimStatus::Resolved => DbClaimStatus::Resolved,
        }
    }
}

impl From<DbClaimStatus> for ClaimStatus {
    fn from(status: DbClaimStatus) -> Self {
        match status {
            DbClaimStatus::Pending => ClaimStatus::Pending,
            DbClaimStatus::InReview => ClaimStatus::InReview,
            DbClaimStatus::Approved => ClaimStatus::Approved,
            DbClaimStatus::Rejected => ClaimStatus::Rejected,
            DbClaimStatus::Resolved => ClaimStatus::Resolved,
        }
    }
}

/// Database row for a claim
#[derive(Debug, sqlx::FromRow)]
struct ClaimRow {
    claim_id: Uuid,
    order_number: String,
    email: String,
    name: String,
    address: String,
    phone_number: String,
    brand: String,
    problem_description: String,
    status: DbClaimStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            id: ClaimId::from(row.claim_id),
            order_number: row.order_number,
            email: row.email,
            name: row.name,
            address: row.address,
            phone_number: row.phone_number,
            brand: row.brand,
            problem_description: row.problem_description,
            status: row.status.into(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_round_trip() {
        let statuses = [
            ClaimStatus::Pending,
            ClaimStatus::InReview,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
            ClaimStatus::Resolved,
        ];

        for status in statuses {
            let db_status = DbClaimStatus::from(status);
            assert_eq!(ClaimStatus::from(db_status), status);
        }
    }
}
