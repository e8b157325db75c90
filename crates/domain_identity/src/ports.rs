//! Identity Domain Ports
//!
//! The `UserRepository` trait defines everything the identity domain needs
//! from its account store. Adapters live in the infrastructure layer; both
//! the PostgreSQL and in-memory implementations satisfy the same atomicity
//! contract, so the services here stay storage-agnostic.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};

use crate::user::{NewUser, User};

/// Port for account storage
#[async_trait]
pub trait UserRepository: DomainPort + HealthCheckable {
    /// Counts all stored accounts
    async fn count(&self) -> Result<i64, PortError>;

    /// Looks up an account by its login email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortError>;

    /// Inserts the first account
    ///
    /// Implementations must make the emptiness check and the insert a single
    /// atomic step: when concurrent callers race, exactly one receives the
    /// created account and every other caller receives `PortError::Conflict`.
    async fn insert_first_admin(&self, user: NewUser) -> Result<User, PortError>;
}
