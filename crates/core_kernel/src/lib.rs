//! Core Kernel - Foundational types and utilities for the claim-intake system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers
//! - Port traits and the shared port error vocabulary

pub mod identifiers;
pub mod ports;

pub use identifiers::{ClaimId, UserId};
pub use ports::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
