pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::candidates::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload", post(handlers::handle_upload).layer(upload_limit))
        .route("/candidates", get(handlers::handle_list_candidates))
        .route(
            "/candidates/filter",
            get(handlers::handle_filter_candidates),
        )
        .route("/candidates/:id", delete(handlers::handle_delete_candidate))
        .with_state(state)
}
