//! HTTP transport layer.
//!
//! Exposes the CORS middleware hook and the plain HTTP handlers.

pub mod cors;
pub mod health;
