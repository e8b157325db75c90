//! Data transfer objects
//!
//! Wire representations of the domain types. Request DTOs deserialize the
//! camelCase JSON clients send; response DTOs own the camelCase output so
//! the domain structs never leak their internal field casing.

pub mod claims;
pub mod identity;
