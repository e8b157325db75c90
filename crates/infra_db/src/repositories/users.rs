//! Account repository implementation
//!
//! This module provides database access for accounts, including the
//! single-shot bootstrap insert that creates the first administrator.
//!
//! # Bootstrap Atomicity
//!
//! `insert_first_admin` uses a guarded INSERT (`WHERE NOT EXISTS`) so the
//! emptiness check and the write happen in one statement. The partial
//! unique index on `is_admin` backs this up at the schema level; either
//! mechanism turning a racer away surfaces as `PortError::Conflict`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError, UserId};
use domain_identity::ports::UserRepository;
use domain_identity::user::{NewUser, User};

use crate::error::DatabaseError;
use crate::repositories::{check_pool, db_to_port_error};

/// PostgreSQL-backed implementation of the `UserRepository` port
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PostgresUserRepository {}

#[async_trait]
impl HealthCheckable for PostgresUserRepository {
    async fn health_check(&self) -> HealthCheckResult {
        check_pool(&self.pool, "postgres-user-repository").await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64, PortError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_to_port_error(DatabaseError::from(&e)))?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortError> {
        debug!("Fetching account by email");

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, email, password_hash, is_admin, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_to_port_error(DatabaseError::from(&e)))?;

        Ok(row.map(User::from))
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert_first_admin(&self, user: NewUser) -> Result<User, PortError> {
        debug!("Inserting first administrator");

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (user_id, email, password_hash, is_admin)
            SELECT $1, $2, $3, $4
            WHERE NOT EXISTS (SELECT 1 FROM users)
            RETURNING user_id, email, password_hash, is_admin, created_at
            "#,
        )
        .bind(Uuid::from(UserId::new_v7()))
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            let db_err = DatabaseError::from(&e);
            // A racer stopped by the single-admin index is a conflict
            if db_err.is_constraint_violation() {
                PortError::conflict("admin user already exists")
            } else {
                db_to_port_error(db_err)
            }
        })?;

        row.map(User::from)
            .ok_or_else(|| PortError::conflict("admin user already exists"))
    }
}

/// Database row for an account
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::from(row.user_id),
            email: row.email,
            password_hash: row.password_hash,
            is_admin: row.is_admin,
            created_at: row.created_at,
        }
    }
}
