//! Observability: the per-request access log.

pub mod access_log;

pub use access_log::{access_log, AccessLogSink, MemorySink, TracingSink};
