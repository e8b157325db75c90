//! Claim Intake and Tracking Domain
//!
//! This crate implements the claim lifecycle from customer submission
//! through administrator review to resolution.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> InReview -> Approved/Rejected -> Resolved
//! ```
//!
//! Review can send a claim back to `Pending`, and an approval or rejection
//! can be reopened into `InReview`. `Resolved` is terminal.

pub mod claim;
pub mod error;
pub mod lifecycle;
pub mod ports;

pub use claim::{Claim, ClaimPatch, ClaimStatus, NewClaim};
pub use error::ClaimError;
pub use lifecycle::ClaimLifecycle;
pub use ports::ClaimRepository;
