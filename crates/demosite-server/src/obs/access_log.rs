//! Request/Response logger.
//!
//! Wraps every route. Request-side fields are captured before the handler
//! runs (timestamp included), response-side fields after it returns, and one
//! `RequestLogEntry` is handed to the configured sink. Bodies are buffered to
//! measure them and re-attached unchanged, so logging never alters what the
//! client receives.

use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http_body_util::LengthLimitError;

use demosite_core::error::DemoSiteError;
use demosite_core::model::access::HeaderFields;
use demosite_core::model::{RequestLogEntry, RequestSnapshot, ResponseSnapshot};

use crate::app_state::AppState;
use crate::error::{HandlerFailure, PageError};

/// Tracing target of access log lines.
pub const ACCESS_TARGET: &str = "demosite::access";

/// Destination for finished access log entries.
pub trait AccessLogSink: Send + Sync {
    fn emit(&self, entry: &RequestLogEntry);
}

/// Writes each entry as one JSON line through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AccessLogSink for TracingSink {
    fn emit(&self, entry: &RequestLogEntry) {
        tracing::info!(target: ACCESS_TARGET, "{}", entry.to_json_line());
    }
}

/// Keeps entries in memory. Used by tests and local inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<RequestLogEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<RequestLogEntry> {
        match self.entries.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AccessLogSink for MemorySink {
    fn emit(&self, entry: &RequestLogEntry) {
        match self.entries.lock() {
            Ok(mut g) => g.push(entry.clone()),
            Err(poisoned) => poisoned.into_inner().push(entry.clone()),
        }
    }
}

fn header_fields(headers: &HeaderMap) -> HeaderFields {
    headers
        .iter()
        .map(|(k, v)| {
            let value = v.to_str().map(str::to_string).unwrap_or_else(|_| "<binary>".into());
            (k.as_str().to_string(), value)
        })
        .collect()
}

/// Whether a body read failed because it hit the size limit, as opposed to a
/// broken stream or a client going away.
fn is_length_limit(e: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(e);
    while let Some(err) = source {
        if err.is::<LengthLimitError>() {
            return true;
        }
        source = err.source();
    }
    false
}

fn utc_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Access log middleware (`axum::middleware::from_fn_with_state`).
pub async fn access_log(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let timestamp = utc_timestamp();

    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let (parts, body) = req.into_parts();
    let mut snapshot = RequestSnapshot {
        timestamp,
        method: parts.method.to_string(),
        url: parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string()),
        headers: header_fields(&parts.headers),
        body_size: 0,
        remote_addr,
    };

    let res = match axum::body::to_bytes(body, state.cfg().server.max_body_bytes).await {
        Ok(bytes) => {
            snapshot.body_size = bytes.len();
            next.run(Request::from_parts(parts, Body::from(bytes))).await
        }
        Err(e) if is_length_limit(&e) => {
            tracing::debug!(error = %e, "request body over limit");
            PageError(DemoSiteError::PayloadTooLarge).into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, "request body could not be read");
            PageError(DemoSiteError::BadRequest(format!("request body: {e}"))).into_response()
        }
    };

    let (res_parts, res_body) = res.into_parts();
    let res_bytes: Bytes = match axum::body::to_bytes(res_body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            // the body stream itself failed; nothing intact is left to forward
            tracing::error!(error = %e, "response body could not be buffered");
            return PageError(DemoSiteError::Internal(format!("response body: {e}")))
                .into_response();
        }
    };

    let response = ResponseSnapshot {
        status: res_parts.status.as_u16(),
        headers: header_fields(&res_parts.headers),
        body_size: res_bytes.len(),
        error: res_parts
            .extensions
            .get::<HandlerFailure>()
            .map(|HandlerFailure(code)| code.as_str()),
    };

    let entry = snapshot.complete(response, started.elapsed().as_secs_f64());
    state.access_sink().emit(&entry);

    Response::from_parts(res_parts, Body::from(res_bytes))
}
