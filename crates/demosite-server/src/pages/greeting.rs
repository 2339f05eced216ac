use axum::response::Html;

use super::layout::page;

/// Same body for every method and request.
pub async fn greeting() -> Html<String> {
    Html(page(
        "Hello from Demosite",
        r#"        <div class="bg-white rounded-lg shadow p-8 text-center">
            <h1 class="text-4xl font-bold mb-4">Hello from Demosite! 👋</h1>
            <p class="text-lg mb-6">Welcome to a small web application built with Rust, axum and Tailwind CSS.</p>
            <nav class="space-x-4">
                <a class="text-blue-600 hover:underline" href="/status">System Status</a>
                <a class="text-blue-600 hover:underline" href="/demo">DB Demo</a>
            </nav>
        </div>"#,
    ))
}
