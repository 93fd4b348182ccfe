//! corsette core: transport-agnostic CORS policy and the shared error type.
//!
//! The policy here decides, from an `Origin` value and a request method,
//! whether a cross-origin request is granted and which response headers grant
//! it. It carries no HTTP or runtime dependencies so the gateway (axum) and
//! tests can drive it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{CorsetteError, Result};
pub use policy::{build_cors_policy, CorsDecision, CorsPolicy};
