//! Axum router wiring.
//!
//! `/` greeting, `/status` host metrics, `/demo` record form. Every route
//! runs behind the access log middleware.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, obs, pages};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::greeting).post(pages::greeting))
        .route("/status", get(pages::system_status).post(pages::system_status))
        .route(pages::DEMO_PATH, get(pages::demo_list).post(pages::demo_submit))
        .layer(middleware::from_fn_with_state(state.clone(), obs::access_log))
        .with_state(state)
}
