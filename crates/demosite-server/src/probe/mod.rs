//! Metrics Probe: instantaneous host CPU/memory/platform readings.
//!
//! `sample` blocks for the CPU sampling window (about one second). Nothing is
//! cached between calls; every Status request gets its own sample.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use demosite_core::error::{DemoSiteError, Result};
use demosite_core::model::status::{bytes_to_gib, usage_percent};
use demosite_core::model::SystemStatusSnapshot;

/// CPU usage is measured as the delta across this window.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Source of host metrics. Implementations may block.
pub trait MetricsProbe: Send + Sync {
    fn sample(&self) -> Result<SystemStatusSnapshot>;
}

/// Reads the host through `sysinfo`.
#[derive(Debug, Clone)]
pub struct SysinfoProbe {
    window: Duration,
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoProbe {
    pub fn new() -> Self {
        Self { window: CPU_SAMPLE_WINDOW.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL) }
    }
}

impl MetricsProbe for SysinfoProbe {
    fn sample(&self) -> Result<SystemStatusSnapshot> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(DemoSiteError::Probe("platform not supported by sysinfo".into()));
        }

        let mut sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        // first refresh is the baseline; usage is the delta over the window
        sys.refresh_cpu_usage();
        thread::sleep(self.window);
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let total = sys.total_memory();
        let used = sys.used_memory();
        let memory_usage = usage_percent(used, total)
            .ok_or_else(|| DemoSiteError::Probe("total memory reported as zero".into()))?;

        Ok(SystemStatusSnapshot {
            os_name: os_name(),
            os_version: System::long_os_version().unwrap_or_else(|| "unknown".into()),
            current_datetime: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            cpu_usage: sys.global_cpu_usage(),
            memory_usage,
            memory_total_gib: bytes_to_gib(total),
            memory_used_gib: bytes_to_gib(used),
        })
    }
}

/// Platform family plus kernel release, e.g. `Linux 6.1.0-18-amd64`.
fn os_name() -> String {
    let family = match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    };
    match System::kernel_version() {
        Some(release) => format!("{family} {release}"),
        None => family.to_string(),
    }
}

/// Run a blocking sample off the async workers. The caller still waits for it.
pub async fn sample_blocking(probe: Arc<dyn MetricsProbe>) -> Result<SystemStatusSnapshot> {
    tokio::task::spawn_blocking(move || probe.sample())
        .await
        .map_err(|e| DemoSiteError::Probe(format!("sampling task failed: {e}")))?
}
