//! Status page: a fresh host metrics sample on every request.

use axum::{extract::State, response::Html};

use demosite_core::model::SystemStatusSnapshot;

use super::layout::{escape_html, page};
use crate::app_state::AppState;
use crate::error::PageError;
use crate::probe;

pub async fn system_status(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let snapshot = probe::sample_blocking(state.probe()).await?;
    Ok(Html(render(&snapshot)))
}

fn card(icon: &str, label: &str, value: &str) -> String {
    format!(
        r#"            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-sm uppercase text-gray-500">{icon} {label}</h2>
                <p class="text-xl font-semibold mt-2">{value}</p>
            </div>
"#,
        value = escape_html(value),
    )
}

fn render(s: &SystemStatusSnapshot) -> String {
    let mut body = String::from(
        r#"        <h1 class="text-3xl font-bold mb-2">System Status</h1>
        <p class="text-gray-500 mb-8">Real-time system information</p>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
"#,
    );
    body.push_str(&card("🖥️", "Operating System", &format!("{} ({})", s.os_name, s.os_version)));
    body.push_str(&card("🕒", "Current Time", &s.current_datetime));
    body.push_str(&card("⚡", "CPU Usage", &format!("{:.1}%", s.cpu_usage)));
    body.push_str(&card(
        "💾",
        "Memory Usage",
        &format!(
            "{:.2} GB / {:.2} GB ({:.1}%)",
            s.memory_used_gib, s.memory_total_gib, s.memory_usage
        ),
    ));
    body.push_str(
        r#"        </div>
        <a class="inline-block mt-8 text-blue-600 hover:underline" href="/">Back to Home</a>"#,
    );
    page("System Status - Demosite", &body)
}
