//! Top-level facade crate for corsette.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use corsette_core::*;
}

pub mod gateway {
    pub use corsette_gateway::*;
}
