//! Shared fixtures for router-level tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use tower::ServiceExt;

use demosite_core::error::{DemoSiteError, Result};
use demosite_core::model::SystemStatusSnapshot;
use demosite_server::{
    app_state::AppState,
    config::ServerConfig,
    obs::MemorySink,
    probe::MetricsProbe,
    router::build_router,
    store::RecordStore,
};

/// Returns the same snapshot every time, without blocking.
pub struct FixedProbe;

impl MetricsProbe for FixedProbe {
    fn sample(&self) -> Result<SystemStatusSnapshot> {
        Ok(SystemStatusSnapshot {
            os_name: "Linux 6.1.0".into(),
            os_version: "Debian GNU/Linux 12".into(),
            current_datetime: "2026-10-19 08:15:00".into(),
            cpu_usage: 7.25,
            memory_usage: 38.5,
            memory_total_gib: 15.52,
            memory_used_gib: 5.98,
        })
    }
}

/// Always fails, as an OS facility error would.
pub struct FailingProbe;

impl MetricsProbe for FailingProbe {
    fn sample(&self) -> Result<SystemStatusSnapshot> {
        Err(DemoSiteError::Probe("memory information unavailable".into()))
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: RecordStore,
    pub sink: Arc<MemorySink>,
}

pub async fn app_with_probe(probe: Arc<dyn MetricsProbe>) -> TestApp {
    let store = RecordStore::in_memory().await.unwrap();
    let sink = Arc::new(MemorySink::new());
    let state = AppState::new(ServerConfig::default(), store.clone(), probe, sink.clone());
    TestApp { router: build_router(state), store, sink }
}

pub async fn app() -> TestApp {
    app_with_probe(Arc::new(FixedProbe)).await
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub async fn body_string(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
