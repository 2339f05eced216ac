//! Records, snapshots, and log entries exchanged between server layers.

pub mod access;
pub mod demo;
pub mod status;

pub use access::{RequestLogEntry, RequestSnapshot, ResponseSnapshot};
pub use demo::{DemoRecord, NewDemo};
pub use status::SystemStatusSnapshot;
