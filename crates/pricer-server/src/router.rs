//! Axum router wiring.
//!
//! Routes: `/`, `/health`, `/metrics` (ops) and `POST /predict`.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{app_state::AppState, error, ops, predict};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::root))
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics))
        .route("/predict", post(predict::handler::predict))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .with_state(state)
}
