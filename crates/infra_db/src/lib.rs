//! Infrastructure Storage Layer
//!
//! This crate provides the storage infrastructure for the claim-intake
//! system: PostgreSQL repositories built on SQLx, embedded migrations, and
//! in-memory adapters for tests and database-free runs.
//!
//! # Architecture
//!
//! Each repository implements a domain port trait, hiding the storage
//! implementation details from the domain layer. The application wires
//! either the PostgreSQL or the in-memory implementations behind the same
//! `Arc<dyn ...>` handles.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresClaimRepository, MIGRATOR};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/claimdesk")).await?;
//! MIGRATOR.run(&pool).await?;
//! let claims = PostgresClaimRepository::new(pool);
//! ```

pub mod error;
pub mod memory;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use memory::{MemoryClaimRepository, MemoryUserRepository};
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{PostgresClaimRepository, PostgresUserRepository};

/// Embedded schema migrations, applied at startup
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
