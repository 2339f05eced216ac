//! demosite core: transport-agnostic data model, validation, and error types.
//!
//! This crate defines the records, snapshots, and log entries shared by the
//! server and its tests. It intentionally carries no HTTP, storage, or
//! runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `DemoSiteError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{Result, DemoSiteError, ValidationError};
