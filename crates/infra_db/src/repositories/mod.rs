//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each domain aggregate. Repositories encapsulate
//! SQL queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository implements its domain's port trait directly, so a
//! repository instance can be handed to the application layer as an
//! `Arc<dyn UserRepository>` or `Arc<dyn ClaimRepository>`. Nothing above
//! this module sees SQLx types.

pub mod claims;
pub mod users;

pub use claims::PostgresClaimRepository;
pub use users::PostgresUserRepository;

use chrono::Utc;
use sqlx::PgPool;

use core_kernel::{AdapterHealth, HealthCheckResult, PortError};

use crate::error::DatabaseError;

/// Converts a database error to a port error
///
/// Not-found cases never pass through here; repositories resolve those at
/// the call site where the entity type and id are known.
pub(crate) fn db_to_port_error(e: DatabaseError) -> PortError {
    if e.is_constraint_violation() {
        PortError::conflict(e.to_string())
    } else if e.is_connection_error() {
        PortError::connection(e.to_string())
    } else {
        PortError::internal(e.to_string())
    }
}

/// Runs a connectivity probe against the pool
///
/// Performs a simple SELECT 1 query to verify the connection pool is
/// operational and the database is responsive.
pub(crate) async fn check_pool(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = std::time::Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await;

    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthCheckResult {
            adapter_id: adapter_id.to_string(),
            status: AdapterHealth::Healthy,
            latency_ms,
            message: None,
            checked_at: Utc::now(),
        },
        Err(e) => HealthCheckResult {
            adapter_id: adapter_id.to_string(),
            status: AdapterHealth::Unhealthy,
            latency_ms,
            message: Some(format!("Database error: {}", e)),
            checked_at: Utc::now(),
        },
    }
}
