//! Point-in-time host metrics rendered by the Status page.

use serde::Serialize;

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// One sample of host state. Computed per request, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatusSnapshot {
    /// Platform family plus kernel release, e.g. `Linux 6.1.0`.
    pub os_name: String,
    pub os_version: String,
    /// Local time at sample, `%Y-%m-%d %H:%M:%S`.
    pub current_datetime: String,
    pub cpu_usage: f32,
    pub memory_usage: f32,
    /// GiB, rounded to 2 decimals.
    pub memory_total_gib: f64,
    /// GiB, rounded to 2 decimals.
    pub memory_used_gib: f64,
}

/// Convert a byte count to GiB rounded to 2 decimal places.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_GIB)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Used/total as a percentage. Zero total yields `None`.
pub fn usage_percent(used: u64, total: u64) -> Option<f32> {
    if total == 0 {
        return None;
    }
    Some(((used as f64 / total as f64) * 100.0) as f32)
}
