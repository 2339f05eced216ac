//! demosite server library entry.
//!
//! Wires config, the SQLite record store, the host metrics probe, the access
//! log middleware, and the page handlers into one axum application. Consumed
//! by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod obs;
pub mod pages;
pub mod probe;
pub mod router;
pub mod store;
