pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyses",
            post(handlers::handle_analyze_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/analyses/text", post(handlers::handle_analyze_text))
        .with_state(state)
}
