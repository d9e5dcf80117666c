pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scan::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/refine", post(handlers::handle_refine))
        .with_state(state)
}
