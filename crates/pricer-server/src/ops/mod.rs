//! Operational HTTP endpoints.
//!
//! - `/`        : endpoint descriptor
//! - `/health`  : liveness (only reachable once the model is loaded)
//! - `/metrics` : request count and average model latency (JSON)

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::app_state::AppState;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Housing Price Prediction API is running",
        "endpoints": {
            "/": "This overview",
            "/health": "Liveness check",
            "/predict": "POST a housing record, returns a price estimate",
            "/metrics": "Request count and average model latency",
        }
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics().snapshot())
}
