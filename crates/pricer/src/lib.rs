//! Top-level facade crate for pricer.
//!
//! Re-exports the core types and the server library so users can depend on a single crate.

pub mod core {
    pub use pricer_core::*;
}

pub mod server {
    pub use pricer_server::*;
}
