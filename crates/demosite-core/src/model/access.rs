//! Per-request access log entry.
//!
//! The request side is captured when a request enters the pipeline and the
//! response side is filled in on exit. The finished entry serializes to a
//! single JSON object with flat keys.

use std::collections::BTreeMap;

use serde::Serialize;

/// Header name -> value. Ordered so log lines are deterministic.
pub type HeaderFields = BTreeMap<String, String>;

/// Request-side fields, captured at entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSnapshot {
    /// UTC, `%Y-%m-%d %H:%M:%S`, taken at entry.
    pub timestamp: String,
    pub method: String,
    /// Path including the query string.
    pub url: String,
    pub headers: HeaderFields,
    pub body_size: usize,
    pub remote_addr: String,
}

/// Response-side fields, captured at exit.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSnapshot {
    pub status: u16,
    pub headers: HeaderFields,
    pub body_size: usize,
    /// Client code of the handler failure that produced this response, if any.
    pub error: Option<&'static str>,
}

/// Complete entry, emitted once per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestLogEntry {
    #[serde(flatten)]
    pub request: RequestSnapshot,
    pub response_status: u16,
    pub response_headers: HeaderFields,
    pub response_body_size: usize,
    pub processing_duration_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl RequestSnapshot {
    /// Combine with the response side and elapsed seconds.
    pub fn complete(self, response: ResponseSnapshot, elapsed_secs: f64) -> RequestLogEntry {
        RequestLogEntry {
            request: self,
            response_status: response.status,
            response_headers: response.headers,
            response_body_size: response.body_size,
            processing_duration_seconds: elapsed_secs,
            error: response.error,
        }
    }
}

impl RequestLogEntry {
    /// Single-line JSON rendering used by log sinks.
    pub fn to_json_line(&self) -> String {
        // strings, string maps, and numbers only
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
