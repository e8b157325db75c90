//! Identity Domain
//!
//! This crate implements accounts and authentication for the claim-intake
//! system. The system runs with a single administrator account that is
//! created through a one-time bootstrap flow:
//!
//! ```text
//! empty store -> create_first_admin -> login -> session
//! ```
//!
//! Password hashes never leave this crate through serialization; callers
//! receive a [`SessionProfile`] projection instead.

pub mod bootstrap;
pub mod error;
pub mod password;
pub mod ports;
pub mod session;
pub mod user;

pub use bootstrap::BootstrapGate;
pub use error::IdentityError;
pub use ports::UserRepository;
pub use session::AuthSession;
pub use user::{NewUser, SessionProfile, User};
