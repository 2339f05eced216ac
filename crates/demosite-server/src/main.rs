//! demosite server
//!
//! - `/`       greeting page
//! - `/status` host CPU/memory/OS snapshot
//! - `/demo`   create and list Demo records (SQLite)
//! - One JSON access log line per request

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use demosite_core::error::{DemoSiteError, Result};
use demosite_server::{app_state, config, lifecycle, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = config::load_or_default()?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::from_config(cfg).await?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "demosite-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| DemoSiteError::Internal(format!("failed to bind {listen}: {e}")))?;
    lifecycle::init();

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(lifecycle::shutdown_signal())
        .await
        .map_err(|e| DemoSiteError::Internal(format!("server failed: {e}")))?;

    state.store().close().await;
    lifecycle::shutdown();
    Ok(())
}
