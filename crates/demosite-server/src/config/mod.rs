//! Server config loader (strict parsing).

pub mod schema;

use std::{fs, io::ErrorKind};

use demosite_core::error::{DemoSiteError, Result};

pub use schema::{DatabaseSection, ServerConfig, ServerSection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DEMOSITE_CONFIG";
/// Config file used when `DEMOSITE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "demosite.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| DemoSiteError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| DemoSiteError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the file named by `DEMOSITE_CONFIG` (or `demosite.yaml`).
/// A missing file yields the built-in defaults.
pub fn load_or_default() -> Result<ServerConfig> {
    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    match fs::metadata(&path) {
        Ok(_) => load_from_file(&path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%path, "config file not found, using defaults");
            let cfg = ServerConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(DemoSiteError::Internal(format!("stat config failed: {e}"))),
    }
}
