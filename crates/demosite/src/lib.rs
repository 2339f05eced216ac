//! Top-level facade crate for demosite.
//!
//! Re-exports the core model and the server library so users can depend on a single crate.

pub mod core {
    pub use demosite_core::*;
}

pub mod server {
    pub use demosite_server::*;
}
