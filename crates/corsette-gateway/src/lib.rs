//! corsette gateway library entry.
//!
//! Wires the strict config loader, the compiled CORS policy, and the axum
//! router into a host server. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod transport;
