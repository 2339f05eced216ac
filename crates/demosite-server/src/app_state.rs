//! Shared application state for the demosite server.
//!
//! Holds the config, the Record Store, the Metrics Probe, and the access log
//! sink. Collaborators are injected here so tests can swap any of them.

use std::sync::Arc;

use demosite_core::error::Result;

use crate::config::ServerConfig;
use crate::obs::{AccessLogSink, TracingSink};
use crate::probe::{MetricsProbe, SysinfoProbe};
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: RecordStore,
    probe: Arc<dyn MetricsProbe>,
    access_sink: Arc<dyn AccessLogSink>,
}

impl AppState {
    pub fn new(
        cfg: ServerConfig,
        store: RecordStore,
        probe: Arc<dyn MetricsProbe>,
        access_sink: Arc<dyn AccessLogSink>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store, probe, access_sink }),
        }
    }

    /// Production wiring: configured database, sysinfo probe, tracing sink.
    pub async fn from_config(cfg: ServerConfig) -> Result<Self> {
        let store = RecordStore::connect(&cfg.database).await?;
        tracing::info!(
            url = %cfg.database.url,
            records = store.count().await?,
            "record store ready"
        );
        Ok(Self::new(
            cfg,
            store,
            Arc::new(SysinfoProbe::new()),
            Arc::new(TracingSink),
        ))
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &RecordStore {
        &self.inner.store
    }

    pub fn probe(&self) -> Arc<dyn MetricsProbe> {
        Arc::clone(&self.inner.probe)
    }

    pub fn access_sink(&self) -> &dyn AccessLogSink {
        self.inner.access_sink.as_ref()
    }
}
